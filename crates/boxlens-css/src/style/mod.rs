//! Computed style snapshots.
//!
//! [CSSOM § 9 getComputedStyle()](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
//!
//! A [`StyleSnapshot`] holds the resolved values of the handful of properties
//! the inspector needs, as strings, exactly as a browser would report them.
//! Typed accessors parse on demand and never fail.

mod display;
mod tracks;
pub mod values;

pub use display::{AlignValue, DisplayValue, FlexDirection, FlexWrap};
pub use tracks::TrackList;

use boxlens_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::layout::{EdgeSizes, Rect};
use values::{integer_or_zero, length_or_zero, parse_px};

/// Resolved style values for one element.
///
/// Field names follow the CSSOM camel-case spelling when (de)serialized, so a
/// snapshot taken with `getComputedStyle` in a page can be pasted into a
/// scene file unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSnapshot {
    /// Resolved `display`.
    pub display: String,
    /// Resolved `flex-direction`.
    pub flex_direction: String,
    /// Resolved `flex-wrap`.
    pub flex_wrap: String,
    /// Resolved `align-items`.
    pub align_items: String,
    /// Resolved `align-self`.
    pub align_self: String,
    /// Resolved `flex-basis`.
    pub flex_basis: String,
    /// Resolved `order`.
    pub order: String,
    /// Resolved `grid-template-columns`.
    pub grid_template_columns: String,
    /// Resolved `grid-template-rows`.
    pub grid_template_rows: String,
    /// Resolved `column-gap`.
    pub column_gap: String,
    /// Resolved `row-gap`.
    pub row_gap: String,

    /// Resolved `margin-top`.
    pub margin_top: String,
    /// Resolved `margin-right`.
    pub margin_right: String,
    /// Resolved `margin-bottom`.
    pub margin_bottom: String,
    /// Resolved `margin-left`.
    pub margin_left: String,

    /// Resolved `border-top-width`.
    pub border_top_width: String,
    /// Resolved `border-right-width`.
    pub border_right_width: String,
    /// Resolved `border-bottom-width`.
    pub border_bottom_width: String,
    /// Resolved `border-left-width`.
    pub border_left_width: String,

    /// Resolved `padding-top`.
    pub padding_top: String,
    /// Resolved `padding-right`.
    pub padding_right: String,
    /// Resolved `padding-bottom`.
    pub padding_bottom: String,
    /// Resolved `padding-left`.
    pub padding_left: String,
}

impl Default for StyleSnapshot {
    /// Initial values for every tracked property.
    fn default() -> Self {
        let zero = || "0px".to_string();
        Self {
            display: "block".to_string(),
            flex_direction: "row".to_string(),
            flex_wrap: "nowrap".to_string(),
            align_items: "normal".to_string(),
            align_self: "auto".to_string(),
            flex_basis: "auto".to_string(),
            order: "0".to_string(),
            grid_template_columns: "none".to_string(),
            grid_template_rows: "none".to_string(),
            column_gap: "normal".to_string(),
            row_gap: "normal".to_string(),
            margin_top: zero(),
            margin_right: zero(),
            margin_bottom: zero(),
            margin_left: zero(),
            border_top_width: zero(),
            border_right_width: zero(),
            border_bottom_width: zero(),
            border_left_width: zero(),
            padding_top: zero(),
            padding_right: zero(),
            padding_bottom: zero(),
            padding_left: zero(),
        }
    }
}

impl StyleSnapshot {
    /// Set a property by its CSS (kebab-case) name.
    ///
    /// Shorthands `margin`, `padding`, `border-width`, and `gap` expand with
    /// the usual 1-4 value rules. Returns `false` for properties the snapshot
    /// does not track.
    pub fn set_property(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "display" => self.display = value.to_string(),
            "flex-direction" => self.flex_direction = value.to_string(),
            "flex-wrap" => self.flex_wrap = value.to_string(),
            "align-items" => self.align_items = value.to_string(),
            "align-self" => self.align_self = value.to_string(),
            "flex-basis" => self.flex_basis = value.to_string(),
            "order" => self.order = value.to_string(),
            "grid-template-columns" => self.grid_template_columns = value.to_string(),
            "grid-template-rows" => self.grid_template_rows = value.to_string(),
            "column-gap" => self.column_gap = value.to_string(),
            "row-gap" => self.row_gap = value.to_string(),
            "gap" => {
                let mut parts = value.split_whitespace();
                let row = parts.next().unwrap_or("normal").to_string();
                let column = parts.next().map_or_else(|| row.clone(), str::to_string);
                self.row_gap = row;
                self.column_gap = column;
            }
            "margin-top" => self.margin_top = value.to_string(),
            "margin-right" => self.margin_right = value.to_string(),
            "margin-bottom" => self.margin_bottom = value.to_string(),
            "margin-left" => self.margin_left = value.to_string(),
            "border-top-width" => self.border_top_width = value.to_string(),
            "border-right-width" => self.border_right_width = value.to_string(),
            "border-bottom-width" => self.border_bottom_width = value.to_string(),
            "border-left-width" => self.border_left_width = value.to_string(),
            "padding-top" => self.padding_top = value.to_string(),
            "padding-right" => self.padding_right = value.to_string(),
            "padding-bottom" => self.padding_bottom = value.to_string(),
            "padding-left" => self.padding_left = value.to_string(),
            "margin" => {
                let [t, r, b, l] = expand_four(value);
                self.margin_top = t;
                self.margin_right = r;
                self.margin_bottom = b;
                self.margin_left = l;
            }
            "border-width" => {
                let [t, r, b, l] = expand_four(value);
                self.border_top_width = t;
                self.border_right_width = r;
                self.border_bottom_width = b;
                self.border_left_width = l;
            }
            "padding" => {
                let [t, r, b, l] = expand_four(value);
                self.padding_top = t;
                self.padding_right = r;
                self.padding_bottom = b;
                self.padding_left = l;
            }
            _ => return false,
        }
        true
    }

    /// Builder form of [`StyleSnapshot::set_property`]. Untracked
    /// properties are reported once and otherwise ignored.
    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        if !self.set_property(name, value) {
            let _ = warn_once("style", &format!("unsupported property '{}'", name.trim()));
        }
        self
    }

    /// Parsed `display`.
    #[must_use]
    pub fn display(&self) -> DisplayValue {
        DisplayValue::parse(&self.display)
    }

    /// Parsed `flex-direction`, `row` when unrecognized.
    #[must_use]
    pub fn flex_direction(&self) -> FlexDirection {
        self.flex_direction.trim().parse().unwrap_or_default()
    }

    /// Parsed `flex-wrap`, `nowrap` when unrecognized.
    #[must_use]
    pub fn flex_wrap(&self) -> FlexWrap {
        self.flex_wrap.trim().parse().unwrap_or_default()
    }

    /// Parsed `align-items`.
    #[must_use]
    pub fn align_items(&self) -> AlignValue {
        AlignValue::parse(&self.align_items)
    }

    /// Parsed `align-self`.
    #[must_use]
    pub fn align_self(&self) -> AlignValue {
        AlignValue::parse(&self.align_self)
    }

    /// [§ 7.3.3 'flex-basis'](https://www.w3.org/TR/css-flexbox-1/#flex-basis-property)
    ///
    /// The flex basis when it is a definite, non-zero pixel length.
    /// `auto`, `content`, percentages, and zero all yield `None`.
    #[must_use]
    pub fn flex_basis(&self) -> Option<f32> {
        parse_px(&self.flex_basis).filter(|basis| *basis != 0.0)
    }

    /// [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
    #[must_use]
    pub fn order(&self) -> i32 {
        integer_or_zero("order", &self.order)
    }

    /// Resolved column tracks.
    #[must_use]
    pub fn grid_template_columns(&self) -> TrackList {
        TrackList::parse("grid-template-columns", &self.grid_template_columns)
    }

    /// Resolved row tracks.
    #[must_use]
    pub fn grid_template_rows(&self) -> TrackList {
        TrackList::parse("grid-template-rows", &self.grid_template_rows)
    }

    /// [§ 8.1 Gutters](https://www.w3.org/TR/css-align-3/#gutters)
    ///
    /// `normal` resolves to 0 outside of multi-column layout.
    #[must_use]
    pub fn column_gap(&self) -> f32 {
        length_or_zero("column-gap", &self.column_gap).max(0.0)
    }

    /// Row gutter size, see [`StyleSnapshot::column_gap`].
    #[must_use]
    pub fn row_gap(&self) -> f32 {
        length_or_zero("row-gap", &self.row_gap).max(0.0)
    }

    /// [§ 6.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "Negative values for margin properties are allowed"
    #[must_use]
    pub fn margin(&self) -> EdgeSizes {
        EdgeSizes {
            top: length_or_zero("margin-top", &self.margin_top),
            right: length_or_zero("margin-right", &self.margin_right),
            bottom: length_or_zero("margin-bottom", &self.margin_bottom),
            left: length_or_zero("margin-left", &self.margin_left),
        }
    }

    /// [§ 4.3 Line Thickness](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    ///
    /// "Negative values are invalid." Clamped to 0.
    #[must_use]
    pub fn border_width(&self) -> EdgeSizes {
        EdgeSizes {
            top: length_or_zero("border-top-width", &self.border_top_width),
            right: length_or_zero("border-right-width", &self.border_right_width),
            bottom: length_or_zero("border-bottom-width", &self.border_bottom_width),
            left: length_or_zero("border-left-width", &self.border_left_width),
        }
        .non_negative()
    }

    /// [§ 6.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "Negative values for padding properties are invalid." Clamped to 0.
    #[must_use]
    pub fn padding(&self) -> EdgeSizes {
        EdgeSizes {
            top: length_or_zero("padding-top", &self.padding_top),
            right: length_or_zero("padding-right", &self.padding_right),
            bottom: length_or_zero("padding-bottom", &self.padding_bottom),
            left: length_or_zero("padding-left", &self.padding_left),
        }
        .non_negative()
    }

    /// The content box of an element whose border box is `border_box`.
    #[must_use]
    pub fn content_box_of(&self, border_box: Rect) -> Rect {
        border_box.inset(self.border_width() + self.padding())
    }
}

/// Expand a 1-4 value box shorthand into top/right/bottom/left.
fn expand_four(value: &str) -> [String; 4] {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let (t, r, b, l) = match parts.as_slice() {
        [] => ("0px", "0px", "0px", "0px"),
        [all] => (*all, *all, *all, *all),
        [v, h] => (*v, *h, *v, *h),
        [t, h, b] => (*t, *h, *b, *h),
        [t, r, b, l, ..] => (*t, *r, *b, *l),
    };
    [t.to_string(), r.to_string(), b.to_string(), l.to_string()]
}
