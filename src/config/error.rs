//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `vitrine.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("[serve.interface] `{0}` is not an IP address")]
    Interface(String),

    #[error("[build.output] must not be empty")]
    EmptyOutput,
}
