//! Configuration for the magnification filters
//!
//! Provides the [`MagnifyConfig`] schema and TOML loading for it.

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::*;
