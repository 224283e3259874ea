//! Geometry engine for the boxlens inspector overlay.
//!
//! # Scope
//!
//! This crate implements the pure, re-derivable half of the inspector:
//! - **Style snapshots** ([CSSOM § 9 getComputedStyle](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle))
//!   - Raw resolved values as a browser reports them
//!   - Lenient parsing: anything unparsable resolves to 0
//!
//! - **Box model bands** ([CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/))
//!   - Margin, border, and padding strips around each inner box
//!   - Alignment-aware content band for row flex items
//!
//! - **Gap detection**
//!   - Flex item, flex line, and trailing gaps ([CSS Flexbox Level 1](https://www.w3.org/TR/css-flexbox-1/))
//!   - Grid column and row gutters ([CSS Grid Level 1](https://www.w3.org/TR/css-grid-1/))
//!
//! Nothing here holds state between calls. Every function takes rectangles and
//! style snapshots and returns rectangles.

/// Box model, flex, and grid geometry.
pub mod layout;
/// Computed style snapshots and value parsing.
pub mod style;

// Re-exports for convenience
pub use layout::{
    BoxDimensions, BoxModelBands, BoxModelCalculator, ChildGeometry, EdgeSizes, EdgeStrips,
    ElementBox, GapBand, GapDetector, GapKind, LayoutMode, MIN_GAP, Point, Rect,
};
pub use style::{AlignValue, DisplayValue, FlexDirection, FlexWrap, StyleSnapshot, TrackList};
