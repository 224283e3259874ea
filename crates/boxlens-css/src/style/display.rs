//! Keyword-valued properties the inspector reads.
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
//! [§ 5 Ordering and Orientation](https://www.w3.org/TR/css-flexbox-1/#flow-order)
//! [§ 8 Alignment](https://www.w3.org/TR/css-flexbox-1/#alignment)

use strum_macros::{Display, EnumString};

use crate::layout::LayoutMode;

/// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Only the values that matter for gap detection are distinguished; everything
/// else collapses to [`DisplayValue::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DisplayValue {
    /// `display: block`
    #[default]
    Block,
    /// `display: inline`
    Inline,
    /// `display: inline-block`
    InlineBlock,
    /// `display: flex`
    Flex,
    /// `display: inline-flex`
    InlineFlex,
    /// `display: grid`
    Grid,
    /// `display: inline-grid`
    InlineGrid,
    /// `display: none`
    None,
    /// `display: contents`
    Contents,
    /// Any other display type (table, list-item, ruby, ...).
    Other,
}

impl DisplayValue {
    /// Parse a resolved `display` value.
    ///
    /// [§ 2 Box Layout Modes](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// Accepts both the legacy single keyword (`inline-flex`) and the
    /// two-value `<display-outside> <display-inside>` form (`inline flex`).
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let tokens: Vec<&str> = value.split_whitespace().collect();
        let keyword = match tokens.as_slice() {
            [single] => (*single).to_string(),
            ["block", inner] => (*inner).to_string(),
            ["inline", "flow"] => "inline".to_string(),
            ["inline", "flow-root"] => "inline-block".to_string(),
            ["inline", inner] => format!("inline-{inner}"),
            _ => return Self::Other,
        };
        keyword.parse().unwrap_or(Self::Other)
    }

    /// The gap-detection strategy this display type selects, if any.
    #[must_use]
    pub const fn layout_mode(self) -> Option<LayoutMode> {
        match self {
            Self::Flex | Self::InlineFlex => Some(LayoutMode::Flex),
            Self::Grid | Self::InlineGrid => Some(LayoutMode::Grid),
            _ => None,
        }
    }

    /// Whether this is a flex container of either outer type.
    #[must_use]
    pub const fn is_flex(self) -> bool {
        matches!(self, Self::Flex | Self::InlineFlex)
    }
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FlexDirection {
    /// "The flex container's main axis has the same orientation as the inline axis."
    #[default]
    Row,
    /// "Same as row, except the main-start and main-end directions are swapped."
    RowReverse,
    /// "The flex container's main axis has the same orientation as the block axis."
    Column,
    /// "Same as column, except the main-start and main-end directions are swapped."
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is horizontal.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }
}

/// [§ 5.2 'flex-wrap'](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum FlexWrap {
    /// "The flex container is single-line."
    #[default]
    Nowrap,
    /// "The flex container is multi-line."
    Wrap,
    /// "Same as wrap, except the cross-start and cross-end directions are swapped."
    WrapReverse,
}

impl FlexWrap {
    /// Whether items may break onto multiple flex lines.
    #[must_use]
    pub const fn is_wrapping(self) -> bool {
        matches!(self, Self::Wrap | Self::WrapReverse)
    }
}

/// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// Shared by `align-items` and `align-self`. Values outside this list
/// (`safe center`, `first baseline`, ...) parse as [`AlignValue::Normal`],
/// which leaves the content band untouched unless the parent stretches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AlignValue {
    /// `align-self: auto` defers to the parent's `align-items`.
    Auto,
    /// Stretches only when the parent's `align-items` is `stretch`.
    #[default]
    Normal,
    /// "the cross size of the item's margin box is as close to the same size
    /// as the line as possible"
    Stretch,
    /// "The flex item's margin box is centered in the cross axis within the line."
    Center,
    /// "The cross-start margin edge of the flex item is placed flush with the
    /// cross-start edge of the line."
    FlexStart,
    /// "The cross-end margin edge of the flex item is placed flush with the
    /// cross-end edge of the line."
    FlexEnd,
    /// `start` (box alignment)
    Start,
    /// `end` (box alignment)
    End,
    /// `self-start` (box alignment)
    SelfStart,
    /// `self-end` (box alignment)
    SelfEnd,
    /// `baseline`
    Baseline,
}

impl AlignValue {
    /// Parse a resolved alignment keyword, falling back to `normal`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    /// Fold box-alignment synonyms onto their flexbox equivalents.
    ///
    /// In a horizontal writing mode with a row container the start/end
    /// keywords land on the same edge as flex-start/flex-end.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Start | Self::SelfStart => Self::FlexStart,
            Self::End | Self::SelfEnd => Self::FlexEnd,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_keyword() {
        assert_eq!(DisplayValue::parse("flex"), DisplayValue::Flex);
        assert_eq!(DisplayValue::parse("inline-grid"), DisplayValue::InlineGrid);
        assert_eq!(DisplayValue::parse("GRID"), DisplayValue::Grid);
        assert_eq!(DisplayValue::parse("table-cell"), DisplayValue::Other);
    }

    #[test]
    fn test_display_two_value_syntax() {
        assert_eq!(DisplayValue::parse("block flex"), DisplayValue::Flex);
        assert_eq!(DisplayValue::parse("inline flex"), DisplayValue::InlineFlex);
        assert_eq!(DisplayValue::parse("inline flow-root"), DisplayValue::InlineBlock);
        assert_eq!(DisplayValue::parse("inline flow"), DisplayValue::Inline);
        assert_eq!(DisplayValue::parse(""), DisplayValue::Other);
    }

    #[test]
    fn test_align_value_normalization() {
        assert_eq!(AlignValue::parse("self-start").normalized(), AlignValue::FlexStart);
        assert_eq!(AlignValue::parse("end").normalized(), AlignValue::FlexEnd);
        assert_eq!(AlignValue::parse("safe center"), AlignValue::Normal);
        assert_eq!(AlignValue::parse(" flex-end "), AlignValue::FlexEnd);
    }
}
