//! Configuration errors.

use thiserror::Error;

/// Error raised while loading an [`crate::OverlayConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config is not valid JSON, or a field has the wrong type.
    ///
    /// Bad colors inside a config file surface here, with the
    /// [`ConfigError::InvalidColor`] message embedded.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string is neither a hex color nor a known color name.
    #[error("invalid color '{0}'")]
    InvalidColor(String),
}
