//! Overlay geometry.
//!
//! # Module Structure
//!
//! - [`box_model`] - Rectangles, edge sizes, and box-model band strips
//! - [`gaps`] - Gap bands and the flex/grid strategy switch
//! - [`flex`] - Flex item, line, and trailing gaps
//! - [`grid`] - Grid column and row gutters

pub mod box_model;
pub mod flex;
pub mod gaps;
pub mod grid;

// Re-exports for convenience
pub use box_model::{
    BoxDimensions, BoxModelBands, BoxModelCalculator, EdgeSizes, EdgeStrips, ElementBox, Point,
    Rect,
};
pub use gaps::{ChildGeometry, GapBand, GapDetector, GapKind, GapStrategy, LayoutMode, MIN_GAP};
