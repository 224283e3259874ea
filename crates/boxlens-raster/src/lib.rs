//! Software drawing surface for the boxlens overlay.
//!
//! [`PixmapSurface`] implements [`boxlens_overlay::DrawingSurface`] on a
//! tiny-skia pixmap held at device-pixel resolution. Shapes are drawn through
//! a `scale(dpr, dpr)` transform so callers stay in CSS pixels; text is
//! rasterized with fontdue directly in device pixels.

/// Error types.
pub mod error;
/// System font discovery.
pub mod font;
/// The pixmap-backed surface.
pub mod surface;

pub use error::RasterError;
pub use surface::PixmapSurface;
