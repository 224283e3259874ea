//! Display list - the overlay's drawing commands for one redraw.
//!
//! The renderer never touches a surface directly. It records commands back
//! to front, and the host replays them onto whatever [`DrawingSurface`] it
//! owns. Because the list is plain data it can also be dumped as JSON.

use boxlens_css::{Point, Rect};
use serde::Serialize;

use crate::color::Paint;
use crate::surface::DrawingSurface;

/// A single drawing command.
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum OverlayCommand {
    /// Erase the whole surface to transparent.
    Clear,

    /// Set the dash pattern for subsequent strokes. Empty means solid.
    #[serde(rename_all = "camelCase")]
    SetLineDash {
        /// Alternating on and off lengths.
        pattern: Vec<f32>,
    },

    /// Fill a rectangle.
    #[serde(rename_all = "camelCase")]
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill paint.
        paint: Paint,
    },

    /// Stroke the outline of a rectangle, centered on its edges.
    #[serde(rename_all = "camelCase")]
    StrokeRect {
        /// Rectangle to outline.
        rect: Rect,
        /// Stroke paint.
        paint: Paint,
        /// Stroke width.
        line_width: f32,
    },

    /// Fill a circle.
    #[serde(rename_all = "camelCase")]
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f32,
        /// Fill paint.
        paint: Paint,
    },

    /// Stroke a straight line using the current dash pattern.
    #[serde(rename_all = "camelCase")]
    StrokeLine {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke paint.
        paint: Paint,
        /// Stroke width.
        line_width: f32,
    },

    /// Draw one line of text.
    #[serde(rename_all = "camelCase")]
    FillText {
        /// Left end of the text baseline.
        origin: Point,
        /// The text to draw.
        text: String,
        /// Font size in pixels.
        font_size: f32,
        /// Text paint.
        paint: Paint,
    },
}

/// A list of drawing commands in painting order.
///
/// Commands are stored in back-to-front order, so a surface can simply
/// iterate and execute each command.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<OverlayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: OverlayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[OverlayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute every command on `surface`, in order.
    pub fn replay(&self, surface: &mut dyn DrawingSurface) {
        for command in &self.commands {
            match command {
                OverlayCommand::Clear => surface.clear(),
                OverlayCommand::SetLineDash { pattern } => surface.set_line_dash(pattern),
                OverlayCommand::FillRect { rect, paint } => surface.fill_rect(*rect, *paint),
                OverlayCommand::StrokeRect {
                    rect,
                    paint,
                    line_width,
                } => surface.stroke_rect(*rect, *paint, *line_width),
                OverlayCommand::FillCircle {
                    center,
                    radius,
                    paint,
                } => surface.fill_circle(*center, *radius, *paint),
                OverlayCommand::StrokeLine {
                    from,
                    to,
                    paint,
                    line_width,
                } => surface.stroke_line(*from, *to, *paint, *line_width),
                OverlayCommand::FillText {
                    origin,
                    text,
                    font_size,
                    paint,
                } => surface.fill_text(*origin, text, *font_size, *paint),
            }
        }
    }
}
