//! Raster surface errors.

use thiserror::Error;

/// Error raised while allocating or exporting a [`crate::PixmapSurface`].
#[derive(Error, Debug)]
pub enum RasterError {
    /// The backing pixmap could not be allocated at this size.
    #[error("cannot allocate a {width}x{height} pixel surface")]
    SurfaceAllocation {
        /// Requested width in device pixels.
        width: u32,
        /// Requested height in device pixels.
        height: u32,
    },

    /// PNG encoding or writing failed.
    #[error("failed to write image: {0}")]
    Encode(#[from] image::ImageError),
}
