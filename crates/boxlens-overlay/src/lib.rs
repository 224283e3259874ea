//! Overlay rendering and the inspector session for boxlens.
//!
//! # Scope
//!
//! This crate turns the geometry computed by `boxlens-css` into something a
//! user can look at:
//! - **Selection state**: the hovered element and the ordered set of
//!   clicked elements, held as [`boxlens_dom::NodeId`] handles only
//! - **Rendering**: [`OverlayRenderer`] records a [`DisplayList`] in a fixed
//!   back-to-front layer order
//! - **Surfaces**: [`DrawingSurface`] is the seam a host implements to show
//!   the list
//! - **Session**: [`Inspector`] wires pointer, click, and resize events to
//!   state changes and redraws
//!
//! The page is reached only through [`GeometryProvider`] and [`HitTestHost`].

/// Overlay colors and paints.
pub mod color;
/// Visual constants.
pub mod config;
/// Drawing commands.
pub mod display_list;
/// Error types.
pub mod error;
/// Event handling and redraw bookkeeping.
pub mod inspector;
/// Page queries.
pub mod provider;
/// Display list generation.
pub mod renderer;
/// Hover and selection state.
pub mod state;
/// Drawing surface trait.
pub mod surface;

pub use color::{ColorValue, Paint};
pub use config::{GuideStyle, HatchStyle, OutlineStyle, OverlayConfig, TooltipStyle};
pub use display_list::{DisplayList, OverlayCommand};
pub use error::ConfigError;
pub use inspector::Inspector;
pub use provider::{GeometryProvider, HitTestHost};
pub use renderer::{Layer, OverlayRenderer};
pub use state::{HostContext, HoveredElement, SelectionSet, SelectionState};
pub use surface::DrawingSurface;
