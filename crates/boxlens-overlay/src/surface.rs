//! The drawing surface seam.

use boxlens_css::{Point, Rect};

use crate::color::Paint;

/// Something the overlay can draw on, in CSS pixel coordinates.
///
/// Implementations own the device-pixel backing store; [`DrawingSurface::resize`]
/// is the only place device pixels appear.
pub trait DrawingSurface {
    /// Erase everything to transparent.
    fn clear(&mut self);

    /// Dash pattern used by subsequent strokes. Empty means solid.
    fn set_line_dash(&mut self, pattern: &[f32]);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);

    /// Stroke a rectangle outline centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, paint: Paint, line_width: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint);

    /// Stroke a line with the current dash pattern.
    fn stroke_line(&mut self, from: Point, to: Point, paint: Paint, line_width: f32);

    /// Draw one line of text with its baseline starting at `origin`.
    fn fill_text(&mut self, origin: Point, text: &str, font_size: f32, paint: Paint);

    /// Re-provision the backing store for a `width` x `height` CSS-pixel
    /// viewport at `device_pixel_ratio`, and scale drawing to match.
    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32);
}
