//! What the overlay needs from the page.
//!
//! The renderer and the inspector session only see pages through these two
//! traits, so the same code runs against a loaded [`SceneTree`] in the CLI
//! and against scripted fakes in tests.

use boxlens_css::{Point, Rect, StyleSnapshot};
use boxlens_dom::{NodeId, SceneTree};

/// Read-only geometry queries, re-issued on every redraw.
///
/// Nothing returned here may be cached across redraws: the page can
/// reflow between any two calls.
pub trait GeometryProvider {
    /// Border box of `node` in viewport coordinates.
    fn rect_of(&self, node: NodeId) -> Rect;

    /// Resolved style of `node`.
    fn style_of(&self, node: NodeId) -> StyleSnapshot;

    /// One rectangle per visual fragment of `node`.
    ///
    /// Providers that do not report fragmentation get the border box alone.
    fn fragment_rects_of(&self, node: NodeId) -> Vec<Rect> {
        vec![self.rect_of(node)]
    }

    /// Children of `node` in document order, never including the overlay.
    fn children_of(&self, node: NodeId) -> Vec<NodeId>;

    /// Parent of `node`, if any.
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// Lower-case tag name of `node`.
    fn tag_name_of(&self, node: NodeId) -> String;

    /// Class list of `node`.
    fn class_list_of(&self, node: NodeId) -> Vec<String>;
}

/// Hit testing, with a switch to take the overlay out of it.
pub trait HitTestHost {
    /// Enable or disable hit testing against the overlay surface.
    fn set_overlay_pointer_events(&mut self, enabled: bool);

    /// The topmost node at `point`, overlay included while its pointer
    /// events are enabled.
    fn topmost_node_at(&self, point: Point) -> Option<NodeId>;

    /// Whether `node` is the overlay surface.
    fn is_overlay(&self, node: NodeId) -> bool;
}

impl GeometryProvider for SceneTree {
    fn rect_of(&self, node: NodeId) -> Rect {
        self.element(node).map(|data| data.rect).unwrap_or_default()
    }

    fn style_of(&self, node: NodeId) -> StyleSnapshot {
        self.element(node)
            .map(|data| data.style.clone())
            .unwrap_or_default()
    }

    fn fragment_rects_of(&self, node: NodeId) -> Vec<Rect> {
        self.fragment_rects(node)
    }

    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&child| !self.is_overlay(child))
            .collect()
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn tag_name_of(&self, node: NodeId) -> String {
        self.element(node)
            .map(|data| data.tag_name.clone())
            .unwrap_or_default()
    }

    fn class_list_of(&self, node: NodeId) -> Vec<String> {
        self.element(node)
            .map(|data| data.classes.clone())
            .unwrap_or_default()
    }
}

impl HitTestHost for SceneTree {
    fn set_overlay_pointer_events(&mut self, enabled: bool) {
        Self::set_overlay_pointer_events(self, enabled);
    }

    fn topmost_node_at(&self, point: Point) -> Option<NodeId> {
        Self::topmost_node_at(self, point)
    }

    fn is_overlay(&self, node: NodeId) -> bool {
        Self::is_overlay(self, node)
    }
}
