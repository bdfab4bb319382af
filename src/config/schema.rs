//! Configuration schema for magnification settings
//!
//! A config can be written as top-level TOML keys or under a `[magnify]`
//! table:
//!
//! ```toml
//! [magnify]
//! scale = "hq3x"
//! luma_threshold = 40
//! wrap_horizontal = true
//! ```

use crate::classify::{
    Thresholds, DEFAULT_ALPHA_THRESHOLD, DEFAULT_U_THRESHOLD, DEFAULT_V_THRESHOLD,
    DEFAULT_Y_THRESHOLD,
};
use crate::magnify::Scale;
use serde::{Deserialize, Serialize};

/// Largest accepted threshold; every compared channel is one byte.
pub const MAX_THRESHOLD: u32 = 255;

/// Settings for a magnification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MagnifyConfig {
    /// Filter to apply
    #[serde(default)]
    pub scale: Scale,
    /// Luma (Y) difference that marks an edge
    #[serde(default = "default_luma_threshold")]
    pub luma_threshold: u32,
    /// U chroma difference that marks an edge
    #[serde(default = "default_chroma_u_threshold")]
    pub chroma_u_threshold: u32,
    /// V chroma difference that marks an edge
    #[serde(default = "default_chroma_v_threshold")]
    pub chroma_v_threshold: u32,
    /// Alpha difference that marks an edge
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u32,
    /// Sample the opposite column at the left and right borders
    #[serde(default)]
    pub wrap_horizontal: bool,
    /// Sample the opposite row at the top and bottom borders
    #[serde(default)]
    pub wrap_vertical: bool,
    /// Split work across rayon's thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_luma_threshold() -> u32 {
    DEFAULT_Y_THRESHOLD
}

fn default_chroma_u_threshold() -> u32 {
    DEFAULT_U_THRESHOLD
}

fn default_chroma_v_threshold() -> u32 {
    DEFAULT_V_THRESHOLD
}

fn default_alpha_threshold() -> u32 {
    DEFAULT_ALPHA_THRESHOLD
}

impl Default for MagnifyConfig {
    fn default() -> Self {
        Self {
            scale: Scale::default(),
            luma_threshold: default_luma_threshold(),
            chroma_u_threshold: default_chroma_u_threshold(),
            chroma_v_threshold: default_chroma_v_threshold(),
            alpha_threshold: default_alpha_threshold(),
            wrap_horizontal: false,
            wrap_vertical: false,
            parallel: false,
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the invalid field
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl MagnifyConfig {
    /// Thresholds in the pre-shifted form the classifier compares against.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(
            self.luma_threshold,
            self.chroma_u_threshold,
            self.chroma_v_threshold,
            self.alpha_threshold,
        )
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("luma_threshold", self.luma_threshold),
            ("chroma_u_threshold", self.chroma_u_threshold),
            ("chroma_v_threshold", self.chroma_v_threshold),
            ("alpha_threshold", self.alpha_threshold),
        ] {
            if value > MAX_THRESHOLD {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: format!("must be at most {}, got {}", MAX_THRESHOLD, value),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MagnifyConfig::default();
        assert_eq!(config.scale, Scale::Hq4x);
        assert_eq!(config.luma_threshold, 48);
        assert_eq!(config.chroma_u_threshold, 7);
        assert_eq!(config.chroma_v_threshold, 6);
        assert_eq!(config.alpha_threshold, 0);
        assert!(!config.wrap_horizontal);
        assert!(!config.wrap_vertical);
        assert!(!config.parallel);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_thresholds_follow_config() {
        let config = MagnifyConfig { luma_threshold: 30, alpha_threshold: 9, ..Default::default() };
        let t = config.thresholds();
        assert_eq!(t.luma(), 30);
        assert_eq!(t.alpha(), 9);
        assert_eq!(t, Thresholds::new(30, 7, 6, 9));
    }

    #[test]
    fn test_validate_reports_every_field() {
        let config = MagnifyConfig {
            luma_threshold: 256,
            chroma_v_threshold: 1000,
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "luma_threshold");
        assert_eq!(errors[1].field, "chroma_v_threshold");
        assert!(errors[1].to_string().contains("1000"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: MagnifyConfig = toml::from_str("scale = \"hq3x\"\nwrap_vertical = true").unwrap();
        assert_eq!(config.scale, Scale::Hq3x);
        assert!(config.wrap_vertical);
        assert_eq!(config.luma_threshold, 48);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<MagnifyConfig, _> = toml::from_str("lumma_threshold = 3");
        assert!(result.is_err());
    }
}
