//! Overlay colors and paints.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
///
/// Serialized as a hex string so config files read like CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color or one of the named colors the overlay uses.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_named(value)
        }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: short(3)?,
            }),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: long(6)?,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// Only the handful of names the default overlay palette is built from.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "red" => Some(Self::rgb(255, 0, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            "orange" => Some(Self::rgb(255, 165, 0)),
            "purple" => Some(Self::rgb(128, 0, 128)),
            "darkred" => Some(Self::rgb(139, 0, 0)),
            "lightgreen" => Some(Self::rgb(144, 238, 144)),
            "lightblue" => Some(Self::rgb(173, 216, 230)),
            "transparent" => Some(Self { r: 0, g: 0, b: 0, a: 0 }),
            _ => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for ColorValue {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for ColorValue {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorValue> for String {
    fn from(color: ColorValue) -> Self {
        color.to_string()
    }
}

/// A color plus the opacity it is drawn with.
///
/// [§ 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paint {
    /// Base color.
    pub color: ColorValue,
    /// Opacity multiplier, 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(ColorValue::BLACK, 1.0)
    }
}

impl Paint {
    /// Create a paint.
    #[must_use]
    pub const fn new(color: ColorValue, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Final alpha in 0.0..=1.0: the color's own alpha times the opacity.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        (f32::from(self.color.a) / 255.0 * self.opacity).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(ColorValue::from_hex("#fff"), Some(ColorValue::WHITE));
        assert_eq!(
            ColorValue::from_hex("#8000"),
            Some(ColorValue { r: 0x88, g: 0, b: 0, a: 0 })
        );
        assert_eq!(ColorValue::from_hex("#ffa500"), Some(ColorValue::rgb(255, 165, 0)));
        assert_eq!(
            ColorValue::from_hex("#80008080"),
            Some(ColorValue { r: 128, g: 0, b: 128, a: 128 })
        );
        assert_eq!(ColorValue::from_hex("#12345"), None);
        assert_eq!(ColorValue::from_hex("#gggggg"), None);
        assert_eq!(ColorValue::from_hex("#éé"), None);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(ColorValue::rgb(255, 165, 0).to_string(), "#ffa500");
        assert_eq!(ColorValue { r: 0, g: 0, b: 0, a: 0 }.to_string(), "#00000000");
    }

    #[test]
    fn test_from_str_reports_invalid_color() {
        let err = "chartreuse-ish".parse::<ColorValue>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(ref s) if s == "chartreuse-ish"));
    }

    #[test]
    fn test_paint_alpha_combines_color_and_opacity() {
        let paint = Paint::new(ColorValue { r: 0, g: 0, b: 0, a: 51 }, 0.5);
        assert!((paint.alpha() - 0.1).abs() < 1e-6);
        assert_eq!(Paint::new(ColorValue::BLACK, 2.0).alpha(), 1.0);
    }
}
