//! Configuration loading for magnification settings
//!
//! Parses TOML from a string or file, then validates it.

use super::schema::MagnifyConfig;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Section name accepted around the settings.
const SECTION: &str = "magnify";

/// Parse and validate a TOML document.
///
/// Settings are read from a `[magnify]` table when the document has one,
/// otherwise from the top-level keys.
///
/// # Example
/// ```
/// use hqscale::config::parse_config;
/// use hqscale::Scale;
///
/// let config = parse_config("[magnify]\nscale = \"hq3x\"").unwrap();
/// assert_eq!(config.scale, Scale::Hq3x);
/// ```
pub fn parse_config(contents: &str) -> Result<MagnifyConfig, ConfigError> {
    let mut document: toml::Table = toml::from_str(contents)?;
    let config: MagnifyConfig = match document.remove(SECTION) {
        Some(section) => section.try_into()?,
        None => toml::Value::Table(document).try_into()?,
    };

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Load configuration from a specific file path.
pub fn load_config(path: &Path) -> Result<MagnifyConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), scale = %config.scale, "loaded magnify config");
    Ok(config)
}

impl MagnifyConfig {
    /// Parse and validate a TOML document. See [`parse_config`].
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse_config(contents)
    }

    /// Load and validate a TOML file. See [`load_config`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        load_config(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magnify::Scale;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parse_top_level_keys() {
        let config = parse_config("scale = \"hq3x\"\nluma_threshold = 32").unwrap();
        assert_eq!(config.scale, Scale::Hq3x);
        assert_eq!(config.luma_threshold, 32);
    }

    #[test]
    fn test_parse_section() {
        let config = parse_config(
            "[magnify]\nscale = \"hq4x\"\nwrap_horizontal = true\nalpha_threshold = 16",
        )
        .unwrap();
        assert_eq!(config.scale, Scale::Hq4x);
        assert!(config.wrap_horizontal);
        assert_eq!(config.alpha_threshold, 16);
    }

    #[test]
    fn test_section_ignores_other_tables() {
        let config = parse_config("[project]\nname = \"demo\"\n\n[magnify]\nparallel = true").unwrap();
        assert!(config.parallel);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), MagnifyConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("scale = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_scale_is_parse_error() {
        let err = parse_config("scale = \"hq2x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let err = parse_config("luma_threshold = 300\nchroma_u_threshold = 999").unwrap_err();
        match &err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
        let msg = err.to_string();
        assert!(msg.contains("  - 'luma_threshold'"));
        assert!(msg.contains("  - 'chroma_u_threshold'"));
    }

    #[test]
    fn test_load_config_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("hqscale.toml");
        File::create(&path)
            .expect("should create config file")
            .write_all(b"[magnify]\nscale = \"hq3x\"\nwrap_vertical = true\n")
            .expect("should write config content");

        let config = load_config(&path).unwrap();
        assert_eq!(config.scale, Scale::Hq3x);
        assert!(config.wrap_vertical);
        assert_eq!(MagnifyConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let err = load_config(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
