//! A [`DrawingSurface`] backed by a tiny-skia pixmap.

use std::path::Path;

use boxlens_css::{Point, Rect};
use boxlens_overlay::{ColorValue, DrawingSurface, Paint};
use fontdue::Font;
use image::RgbaImage;
use tiny_skia::{
    Color, FillRule, Path as SkPath, PathBuilder, Pixmap, PremultipliedColorU8, Stroke,
    StrokeDash, Transform,
};

use crate::error::RasterError;
use crate::font;

/// Transparent overlay pixels at device resolution.
///
/// All drawing methods take CSS pixels. [`PixmapSurface::resize`] sets the
/// backing size to `ceil(width * dpr) x ceil(height * dpr)` and the drawing
/// transform to `scale(dpr, dpr)`.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    device_pixel_ratio: f32,
    dash: Vec<f32>,
    font: Option<Font>,
}

impl PixmapSurface {
    /// Allocate a surface for a `width` x `height` CSS-pixel viewport and
    /// look up a system font for text.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::SurfaceAllocation`] if the pixmap cannot be
    /// allocated.
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Result<Self, RasterError> {
        let dpr = sanitize_ratio(device_pixel_ratio);
        let (device_width, device_height) = device_size(width, height, dpr);
        let pixmap = Pixmap::new(device_width, device_height).ok_or(
            RasterError::SurfaceAllocation {
                width: device_width,
                height: device_height,
            },
        )?;

        Ok(Self {
            pixmap,
            transform: Transform::from_scale(dpr, dpr),
            device_pixel_ratio: dpr,
            dash: Vec::new(),
            font: font::load_system_font(),
        })
    }

    /// Replace the text font. `None` disables text.
    #[must_use]
    pub fn with_font(mut self, font: Option<Font>) -> Self {
        self.font = font;
        self
    }

    /// Backing width in device pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Backing height in device pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Current device pixel ratio.
    #[must_use]
    pub const fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Straight-alpha RGBA of the device pixel at (`x`, `y`).
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
    }

    /// Copy the surface into an `image` buffer with straight alpha.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::SurfaceAllocation`] if the buffer cannot be
    /// built at the surface size.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, RasterError> {
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.width(), self.height(), data).ok_or(
            RasterError::SurfaceAllocation {
                width: self.width(),
                height: self.height(),
            },
        )
    }

    /// Write the surface to `path` as a PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        log::debug!(
            "wrote {}x{} overlay to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    fn stroke(&self, line_width: f32) -> Stroke {
        Stroke {
            width: line_width,
            dash: dash_pattern(&self.dash),
            ..Stroke::default()
        }
    }

    fn stroke_path(&mut self, path: &SkPath, paint: Paint, line_width: f32) {
        if line_width <= 0.0 {
            return;
        }
        let stroke = self.stroke(line_width);
        self.pixmap
            .stroke_path(path, &sk_paint(paint), &stroke, self.transform, None);
    }

    /// Source-over one glyph coverage value onto a device pixel.
    fn blend_pixel(&mut self, x: i32, y: i32, color: ColorValue, alpha: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() {
            return;
        }
        let index = (y * self.width() + x) as usize;
        if let Some(pixel) = self.pixmap.pixels_mut().get_mut(index) {
            *pixel = source_over(*pixel, color, alpha);
        }
    }
}

impl DrawingSurface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.dash = pattern.to_vec();
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        if let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            self.pixmap
                .fill_rect(rect, &sk_paint(paint), self.transform, None);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, paint: Paint, line_width: f32) {
        if let Some(rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            let path = PathBuilder::from_rect(rect);
            self.stroke_path(&path, paint, line_width);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, paint: Paint) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &sk_paint(paint),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, paint: Paint, line_width: f32) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.x, from.y);
        builder.line_to(to.x, to.y);
        if let Some(path) = builder.finish() {
            self.stroke_path(&path, paint, line_width);
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn fill_text(&mut self, origin: Point, text: &str, font_size: f32, paint: Paint) {
        let Some(font) = self.font.take() else {
            return;
        };

        let dpr = self.device_pixel_ratio;
        let size = font_size * dpr;
        let baseline = (origin.y * dpr).round() as i32;
        let mut pen_x = origin.x * dpr;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let (metrics, bitmap) = font.rasterize(ch, size);
            // fontdue reports ymin as the bottom edge offset from the baseline.
            let glyph_left = pen_x.round() as i32 + metrics.xmin;
            let glyph_top = baseline - metrics.ymin - metrics.height as i32;

            for (row, line) in bitmap.chunks(metrics.width.max(1)).enumerate() {
                for (column, &coverage) in line.iter().enumerate() {
                    if coverage > 0 {
                        self.blend_pixel(
                            glyph_left + column as i32,
                            glyph_top + row as i32,
                            paint.color,
                            paint.alpha() * f32::from(coverage) / 255.0,
                        );
                    }
                }
            }
            pen_x += metrics.advance_width;
        }

        self.font = Some(font);
    }

    fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let dpr = sanitize_ratio(device_pixel_ratio);
        let (device_width, device_height) = device_size(width, height, dpr);
        match Pixmap::new(device_width, device_height) {
            Some(pixmap) => {
                self.pixmap = pixmap;
                self.transform = Transform::from_scale(dpr, dpr);
                self.device_pixel_ratio = dpr;
                log::debug!("surface resized to {device_width}x{device_height} device pixels");
            }
            None => log::warn!(
                "cannot allocate a {device_width}x{device_height} surface, keeping {}x{}",
                self.width(),
                self.height()
            ),
        }
    }
}

fn sanitize_ratio(device_pixel_ratio: f32) -> f32 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    }
}

/// Device-pixel backing size, at least one pixel on each axis.
fn device_size(width: f32, height: f32, dpr: f32) -> (u32, u32) {
    let scale = |extent: f32| {
        let pixels = (extent * dpr).ceil();
        if pixels.is_finite() && pixels >= 1.0 {
            pixels.min(u32::MAX as f32) as u32
        } else {
            1
        }
    };
    (scale(width), scale(height))
}

fn sk_paint(paint: Paint) -> tiny_skia::Paint<'static> {
    let color = paint.color;
    let mut sk = tiny_skia::Paint::default();
    sk.set_color_rgba8(
        color.r,
        color.g,
        color.b,
        (paint.alpha() * 255.0).round() as u8,
    );
    sk.anti_alias = true;
    sk
}

/// A tiny-skia dash, or `None` for solid lines.
///
/// An odd-length pattern is repeated once to make it even, as canvas
/// `setLineDash` does.
fn dash_pattern(pattern: &[f32]) -> Option<StrokeDash> {
    if pattern.is_empty() {
        return None;
    }
    let mut intervals = pattern.to_vec();
    if intervals.len() % 2 == 1 {
        intervals.extend_from_slice(pattern);
    }
    StrokeDash::new(intervals, 0.0)
}

fn source_over(dst: PremultipliedColorU8, color: ColorValue, alpha: f32) -> PremultipliedColorU8 {
    let alpha = alpha.clamp(0.0, 1.0);
    let keep = 1.0 - alpha;
    let mix = |src: u8, dst: u8| {
        f32::from(src)
            .mul_add(alpha, f32::from(dst) * keep)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    let a = mix(255, dst.alpha());
    PremultipliedColorU8::from_rgba(
        mix(color.r, dst.red()).min(a),
        mix(color.g, dst.green()).min(a),
        mix(color.b, dst.blue()).min(a),
        a,
    )
    .unwrap_or(dst)
}
