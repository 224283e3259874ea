//! Scene loading errors.

use thiserror::Error;

/// Error raised while loading or validating a scene.
///
/// Only loading can fail. Once a [`crate::SceneTree`] exists, every query on it
/// degrades to an empty answer instead of an error.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),

    /// The scene is not valid JSON or does not match the scene schema.
    #[error("malformed scene: {0}")]
    Json(#[from] serde_json::Error),

    /// A rectangle reported a negative width or height.
    #[error("<{tag}> has a negative size ({width} x {height})")]
    NegativeSize {
        /// Tag of the offending element.
        tag: String,
        /// Reported width.
        width: f32,
        /// Reported height.
        height: f32,
    },

    /// A rectangle or the viewport has an infinite or NaN coordinate.
    #[error("<{tag}> has a non-finite coordinate")]
    NonFinite {
        /// Tag of the offending element, `viewport` for the viewport.
        tag: String,
    },
}
