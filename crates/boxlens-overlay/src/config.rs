//! Visual constants for the overlay.
//!
//! Every field has a default, so a config file only needs to list what it
//! changes:
//!
//! ```json
//! { "gap": { "color": "#ff00ff", "opacity": 0.4 }, "hatch": { "dotSpacing": 4 } }
//! ```

use std::path::Path;

use boxlens_common::warning::warn_once;
use boxlens_css::MIN_GAP;
use serde::{Deserialize, Serialize};

use crate::color::{ColorValue, Paint};
use crate::error::ConfigError;

/// Dotted hatching drawn over gap bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HatchStyle {
    /// Side of each square dot.
    pub dot_size: f32,
    /// Distance between dot origins, both axes.
    pub dot_spacing: f32,
    /// Dot paint.
    pub paint: Paint,
}

impl Default for HatchStyle {
    fn default() -> Self {
        Self {
            dot_size: 1.0,
            dot_spacing: 3.0,
            paint: Paint::new(ColorValue::BLACK, 1.0),
        }
    }
}

/// Dashed guide lines through the edges of selected elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideStyle {
    /// Line paint.
    pub paint: Paint,
    /// Line width.
    pub line_width: f32,
    /// Dash pattern, alternating on and off lengths.
    pub dash: Vec<f32>,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            paint: Paint::new(ColorValue::rgb(139, 0, 0), 1.0),
            line_width: 1.0,
            dash: vec![2.0, 2.0],
        }
    }
}

/// Outline and corner handles of selected elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutlineStyle {
    /// Outline and handle paint.
    pub paint: Paint,
    /// Outline width.
    pub line_width: f32,
    /// Diameter of each corner handle.
    pub handle_size: f32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            paint: Paint::new(ColorValue::BLACK, 1.0),
            line_width: 0.5,
            handle_size: 3.0,
        }
    }
}

/// The hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipStyle {
    /// Distance from the cursor to the tooltip's top-left corner, both axes.
    pub offset: f32,
    /// Font size of both lines.
    pub font_size: f32,
    /// Space between the background edge and the text.
    pub padding: f32,
    /// Background box paint.
    pub background: Paint,
    /// Text paint.
    pub text: Paint,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset: 10.0,
            font_size: 12.0,
            padding: 4.0,
            background: Paint::new(ColorValue::BLACK, 0.75),
            text: Paint::new(ColorValue::WHITE, 1.0),
        }
    }
}

/// All visual constants used by [`crate::OverlayRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Bands and gaps thinner than this are not drawn.
    pub min_gap: f32,
    /// Margin band paint.
    pub margin: Paint,
    /// Border band paint.
    pub border: Paint,
    /// Padding band paint.
    pub padding: Paint,
    /// Content band paint.
    pub content: Paint,
    /// Item and track gap paint.
    pub gap: Paint,
    /// Flex line gap paint, drawn darker than item gaps.
    pub line_gap: Paint,
    /// Hatching over gap bands.
    pub hatch: HatchStyle,
    /// Guide lines.
    pub guide: GuideStyle,
    /// Selection outlines.
    pub outline: OutlineStyle,
    /// Hover tooltip.
    pub tooltip: TooltipStyle,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        let purple = ColorValue::rgb(128, 0, 128);
        Self {
            min_gap: MIN_GAP,
            margin: Paint::new(ColorValue::rgb(255, 165, 0), 0.5),
            border: Paint::new(ColorValue::rgb(0, 128, 0), 0.5),
            padding: Paint::new(ColorValue::rgb(144, 238, 144), 0.5),
            content: Paint::new(ColorValue::rgb(173, 216, 230), 0.5),
            gap: Paint::new(purple, 0.3),
            line_gap: Paint::new(purple, 0.45),
            hatch: HatchStyle::default(),
            guide: GuideStyle::default(),
            outline: OutlineStyle::default(),
            tooltip: TooltipStyle::default(),
        }
    }
}

impl OverlayConfig {
    /// Parse a config from JSON text. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a color is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or for any reason
    /// [`OverlayConfig::from_json_str`] fails.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Clamp out-of-range values so the renderer can trust them.
    ///
    /// Opacities land in 0..=1, sizes are non-negative, and a hatch spacing
    /// that would never advance falls back to the default.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        for paint in [
            &mut self.margin,
            &mut self.border,
            &mut self.padding,
            &mut self.content,
            &mut self.gap,
            &mut self.line_gap,
            &mut self.hatch.paint,
            &mut self.guide.paint,
            &mut self.outline.paint,
            &mut self.tooltip.background,
            &mut self.tooltip.text,
        ] {
            paint.opacity = non_negative("opacity", paint.opacity).min(1.0);
        }

        self.min_gap = non_negative("minGap", self.min_gap);
        self.hatch.dot_size = non_negative("hatch.dotSize", self.hatch.dot_size);
        if !(self.hatch.dot_spacing > 0.0 && self.hatch.dot_spacing.is_finite()) {
            let _ = warn_once(
                "config",
                &format!("hatch.dotSpacing {} never advances, using 3", self.hatch.dot_spacing),
            );
            self.hatch.dot_spacing = HatchStyle::default().dot_spacing;
        }
        self.guide.line_width = non_negative("guide.lineWidth", self.guide.line_width);
        self.guide.dash.retain(|len| len.is_finite() && *len >= 0.0);
        self.outline.line_width = non_negative("outline.lineWidth", self.outline.line_width);
        self.outline.handle_size = non_negative("outline.handleSize", self.outline.handle_size);
        self.tooltip.font_size = non_negative("tooltip.fontSize", self.tooltip.font_size);
        self.tooltip.padding = non_negative("tooltip.padding", self.tooltip.padding);
        self
    }
}

fn non_negative(field: &str, value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        let _ = warn_once("config", &format!("{field} {value} is out of range, using 0"));
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_clamps() {
        let mut config = OverlayConfig::default();
        config.gap.opacity = 3.0;
        config.margin.opacity = -1.0;
        config.hatch.dot_spacing = 0.0;
        config.guide.dash = vec![2.0, -1.0, 3.0];

        let config = config.sanitized();

        assert_eq!(config.gap.opacity, 1.0);
        assert_eq!(config.margin.opacity, 0.0);
        assert_eq!(config.hatch.dot_spacing, 3.0);
        assert_eq!(config.guide.dash, vec![2.0, 3.0]);
    }

    #[test]
    fn test_default_survives_sanitizing() {
        assert_eq!(OverlayConfig::default().sanitized(), OverlayConfig::default());
    }
}
