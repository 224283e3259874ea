//! Gap bands and the flex/grid strategy switch.
//!
//! A gap band is an empty rectangle between adjacent flex items, flex lines,
//! or grid tracks. Both layout modes compute their bands through the same
//! signature, [`GapStrategy`], so callers pick a strategy once from the
//! container's `display` and never branch again.

use serde::Serialize;

use super::box_model::Rect;
use super::{flex, grid};
use crate::style::StyleSnapshot;

/// Smallest gap, in CSS pixels, worth drawing.
pub const MIN_GAP: f32 = 1.0;

/// What a gap band separates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapKind {
    /// Main-axis space between two consecutive flex items.
    FlexItem,
    /// Cross-axis space between two wrapped flex lines. Drawn darker.
    FlexLine,
    /// Space between the last flex item and the container's end edge.
    FlexTrailing,
    /// Gutter between two grid columns.
    GridColumn,
    /// Gutter between two grid rows.
    GridRow,
}

/// One gap region to shade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapBand {
    /// Area of the gap.
    pub rect: Rect,
    /// What the gap separates.
    pub kind: GapKind,
}

impl GapBand {
    /// Create a band.
    #[must_use]
    pub const fn new(rect: Rect, kind: GapKind) -> Self {
        Self { rect, kind }
    }
}

/// A container child as seen by gap detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildGeometry {
    /// Border box of the child.
    pub rect: Rect,
    /// [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
    pub order: i32,
}

impl ChildGeometry {
    /// Pair a rectangle with its `order`.
    #[must_use]
    pub const fn new(rect: Rect, order: i32) -> Self {
        Self { rect, order }
    }
}

/// Shared signature of the flex and grid gap computations:
/// `(children in document order, container border box, container style, minimum gap)`.
pub type GapStrategy = fn(&[ChildGeometry], Rect, &StyleSnapshot, f32) -> Vec<GapBand>;

/// Which gap strategy a container uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Flex container: item, line, and trailing gaps.
    Flex,
    /// Grid container: column and row gutters.
    Grid,
}

impl LayoutMode {
    /// The mode selected by a container's `display`, if it has one.
    #[must_use]
    pub fn of(style: &StyleSnapshot) -> Option<Self> {
        style.display().layout_mode()
    }

    /// The gap computation for this mode.
    #[must_use]
    pub fn strategy(self) -> GapStrategy {
        match self {
            Self::Flex => flex::compute_flex_gaps,
            Self::Grid => grid::compute_grid_gaps,
        }
    }
}

/// Computes gap bands for a container's children.
///
/// Holds only the drawing threshold; nothing survives between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapDetector {
    /// Gaps narrower than this are dropped.
    pub min_gap: f32,
}

impl Default for GapDetector {
    fn default() -> Self {
        Self { min_gap: MIN_GAP }
    }
}

impl GapDetector {
    /// Create a detector with a custom threshold.
    #[must_use]
    pub const fn new(min_gap: f32) -> Self {
        Self { min_gap }
    }

    /// Gap bands for a container, or nothing if it is neither flex nor grid.
    #[must_use]
    pub fn detect(&self, children: &[ChildGeometry], parent: Rect, style: &StyleSnapshot) -> Vec<GapBand> {
        let Some(mode) = LayoutMode::of(style) else {
            return Vec::new();
        };
        let bands = (mode.strategy())(children, parent, style, self.min_gap);
        log::debug!(
            "{mode:?} container with {} children produced {} gap bands",
            children.len(),
            bands.len()
        );
        bands
    }

    /// Flex gaps regardless of `display`.
    #[must_use]
    pub fn flex_gaps(&self, children: &[ChildGeometry], parent: Rect, style: &StyleSnapshot) -> Vec<GapBand> {
        flex::compute_flex_gaps(children, parent, style, self.min_gap)
    }

    /// Grid gaps regardless of `display`.
    #[must_use]
    pub fn grid_gaps(&self, children: &[ChildGeometry], parent: Rect, style: &StyleSnapshot) -> Vec<GapBand> {
        grid::compute_grid_gaps(children, parent, style, self.min_gap)
    }
}
