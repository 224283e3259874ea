//! CSS Box Model geometry and band strips.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::style::{AlignValue, StyleSnapshot};

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle positioned in viewport coordinates.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Width and height are never negative: constructors clamp degenerate input
/// to zero so consumers can rely on `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    #[serde(alias = "left")]
    pub x: f32,
    /// Vertical position of the top-left corner.
    #[serde(alias = "top")]
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Create a rectangle from its four edges.
    ///
    /// A right edge left of the left edge (or bottom above top) collapses
    /// to zero width (height).
    #[must_use]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area covered by the rectangle.
    #[must_use]
    pub const fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the point lies inside (left/top inclusive, right/bottom exclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Whether both dimensions reach `threshold`.
    ///
    /// Bands thinner than the threshold are not worth drawing.
    #[must_use]
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.width >= threshold && self.height >= threshold
    }

    /// Shrink the rectangle by `edges`, staying inside the original.
    ///
    /// When the edges overlap, the inner box collapses onto the point where
    /// they meet instead of escaping the outer box.
    #[must_use]
    pub fn inset(&self, edges: EdgeSizes) -> Self {
        let left = (self.left() + edges.left).min(self.right());
        let right = (self.right() - edges.right).max(left);
        let top = (self.top() + edges.top).min(self.bottom());
        let bottom = (self.bottom() - edges.bottom).max(top);
        Self::from_ltrb(left, top, right, bottom)
    }

    /// Grow the rectangle by `edges`. Negative edges shrink it.
    #[must_use]
    pub fn outset(&self, edges: EdgeSizes) -> Self {
        Self::from_ltrb(
            self.left() - edges.left,
            self.top() - edges.top,
            self.right() + edges.right,
            self.bottom() + edges.bottom,
        )
    }
}

/// Edge sizes for padding, border, or margin.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
    /// Left edge size.
    pub left: f32,
}

impl EdgeSizes {
    /// Same size on all four sides.
    #[must_use]
    pub const fn uniform(size: f32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    /// Clamp every side to zero or more.
    #[must_use]
    pub fn non_negative(self) -> Self {
        Self {
            top: self.top.max(0.0),
            right: self.right.max(0.0),
            bottom: self.bottom.max(0.0),
            left: self.left.max(0.0),
        }
    }
}

impl Add for EdgeSizes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
///
/// The page reports an element's border box, so everything here is derived
/// from it: the margin box grows outward, the padding and content boxes
/// shrink inward.
///
/// ```text
/// ┌─────────────────────────────────────────┐
/// │              margin-top                 │
/// │   ┌─────────────────────────────────┐   │
/// │   │          border-top             │   │
/// │   │   ┌─────────────────────────┐   │   │
/// │   │   │      padding-top        │   │   │
/// │   │   │   ┌─────────────────┐   │   │   │
/// │ m │ b │ p │                 │ p │ b │ m │
/// │ a │ o │ a │     CONTENT     │ a │ o │ a │
/// │ r │ r │ d │                 │ d │ r │ r │
/// │ g │ d │ d │                 │ d │ d │ g │
/// │   │   │   └─────────────────┘   │   │   │
/// │   │   │      padding-bottom     │   │   │
/// │   │   └─────────────────────────┘   │   │
/// │   │          border-bottom          │   │
/// │   └─────────────────────────────────┘   │
/// │              margin-bottom              │
/// └─────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxDimensions {
    margin_box: Rect,
    border_box: Rect,
    padding_box: Rect,
    content_box: Rect,
}

impl BoxDimensions {
    /// Derive all four boxes from a border box and the element's edges.
    #[must_use]
    pub fn from_border_box(border_box: Rect, style: &StyleSnapshot) -> Self {
        let padding_box = border_box.inset(style.border_width());
        Self {
            margin_box: border_box.outset(style.margin()),
            border_box,
            padding_box,
            content_box: padding_box.inset(style.padding()),
        }
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub const fn margin_box(&self) -> Rect {
        self.margin_box
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub const fn border_box(&self) -> Rect {
        self.border_box
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub const fn padding_box(&self) -> Rect {
        self.padding_box
    }

    /// "The content box contains the actual content of the element."
    #[must_use]
    pub const fn content_box(&self) -> Rect {
        self.content_box
    }
}

/// The four strips of one band: the area between an outer and an inner box.
///
/// Top and bottom strips span the full outer width; left and right strips
/// fill the remaining height between them, so the four never overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeStrips {
    /// Strip above the inner box.
    pub top: Rect,
    /// Strip right of the inner box.
    pub right: Rect,
    /// Strip below the inner box.
    pub bottom: Rect,
    /// Strip left of the inner box.
    pub left: Rect,
}

impl EdgeStrips {
    /// Strips covering `outer` minus `inner`.
    #[must_use]
    pub fn between(outer: Rect, inner: Rect) -> Self {
        Self {
            top: Rect::from_ltrb(outer.left(), outer.top(), outer.right(), inner.top()),
            right: Rect::from_ltrb(inner.right(), inner.top(), outer.right(), inner.bottom()),
            bottom: Rect::from_ltrb(outer.left(), inner.bottom(), outer.right(), outer.bottom()),
            left: Rect::from_ltrb(outer.left(), inner.top(), inner.left(), inner.bottom()),
        }
    }

    /// The strips in top, right, bottom, left order.
    #[must_use]
    pub const fn to_array(&self) -> [Rect; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Total area of the four strips.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.to_array().iter().map(Rect::area).sum()
    }
}

/// An element's border box together with its resolved style.
#[derive(Debug, Clone, Copy)]
pub struct ElementBox<'a> {
    /// Border box as reported by the page.
    pub rect: Rect,
    /// Resolved style of the element.
    pub style: &'a StyleSnapshot,
}

impl<'a> ElementBox<'a> {
    /// Pair a rectangle with its style.
    #[must_use]
    pub const fn new(rect: Rect, style: &'a StyleSnapshot) -> Self {
        Self { rect, style }
    }
}

/// Band rectangles for one hovered element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxModelBands {
    /// The boxes the bands were cut from.
    pub dimensions: BoxDimensions,
    /// Margin box minus border box.
    pub margin: EdgeStrips,
    /// Border box minus padding box.
    pub border: EdgeStrips,
    /// Padding box minus content box.
    pub padding: EdgeStrips,
    /// Content band. Equal to the content box unless the element is a row
    /// flex item, in which case its vertical extent follows cross-axis
    /// alignment.
    pub content: Rect,
}

/// Derives margin/border/padding/content bands for one element.
///
/// Stateless: the same rectangles and styles always produce the same bands.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxModelCalculator;

impl BoxModelCalculator {
    /// Compute the bands for `element`, whose parent (if known) is `parent`.
    #[must_use]
    pub fn compute(element: ElementBox<'_>, parent: Option<ElementBox<'_>>) -> BoxModelBands {
        let dimensions = BoxDimensions::from_border_box(element.rect, element.style);

        let content = parent
            .and_then(|parent| Self::flex_item_vertical_extent(element, parent))
            .map_or(dimensions.content_box(), |(top, height)| {
                let border = element.style.border_width();
                let padding = element.style.padding();
                let content_box = dimensions.content_box();
                Rect::new(
                    content_box.x,
                    top + border.top + padding.top,
                    content_box.width,
                    height - border.top - border.bottom - padding.top - padding.bottom,
                )
            });

        log::trace!(
            "box model: border box {:?}, content band {:?}",
            dimensions.border_box(),
            content
        );

        BoxModelBands {
            margin: EdgeStrips::between(dimensions.margin_box(), dimensions.border_box()),
            border: EdgeStrips::between(dimensions.border_box(), dimensions.padding_box()),
            padding: EdgeStrips::between(dimensions.padding_box(), dimensions.content_box()),
            content,
            dimensions,
        }
    }

    /// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
    ///
    /// Re-derive the border-box top and height of an item in a row flex
    /// container from its effective alignment, measured against the parent's
    /// content box. Returns `None` when the parent is not a row flex
    /// container.
    ///
    /// Column containers are left alone: whether the same switch applies with
    /// the axes swapped has not been checked against real layout.
    fn flex_item_vertical_extent(
        element: ElementBox<'_>,
        parent: ElementBox<'_>,
    ) -> Option<(f32, f32)> {
        if !parent.style.display().is_flex() || !parent.style.flex_direction().is_row() {
            return None;
        }

        let margin = element.style.margin();
        let line = parent.style.content_box_of(parent.rect);

        let mut top = element.rect.top();
        // [§ 7.3.3 'flex-basis'] A definite basis replaces the reported height.
        let mut height = element.style.flex_basis().unwrap_or(element.rect.height);

        // "'auto' computes to the parent's align-items value"
        let parent_align = parent.style.align_items();
        let align = match element.style.align_self().normalized() {
            AlignValue::Auto => parent_align.normalized(),
            own => own,
        };
        // Keywords without their own placement take a stretching parent's default.
        let align = match align {
            AlignValue::FlexStart | AlignValue::FlexEnd | AlignValue::Center => align,
            _ if parent_align == AlignValue::Stretch => AlignValue::Stretch,
            other => other,
        };

        match align {
            AlignValue::FlexStart => top = line.top() + margin.top,
            AlignValue::FlexEnd => top = line.bottom() - height - margin.bottom,
            AlignValue::Center => top = line.top() + (line.height - height) / 2.0,
            AlignValue::Stretch => {
                height = line.height - margin.top - margin.bottom;
                top = line.top() + margin.top;
            }
            _ => {}
        }

        Some((top, height.max(0.0)))
    }
}
