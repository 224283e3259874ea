//! Hover and selection state.
//!
//! State holds node handles only. Rectangles and styles are always fetched
//! fresh from the [`crate::GeometryProvider`] when drawing.

use boxlens_css::Point;
use boxlens_dom::{NodeId, Viewport};

/// Selected nodes in the order they were selected, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    nodes: Vec<NodeId>,
}

impl SelectionSet {
    /// Create an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Remove `node` if selected, otherwise append it.
    ///
    /// Returns whether `node` is selected afterwards.
    pub fn toggle(&mut self, node: NodeId) -> bool {
        if let Some(index) = self.nodes.iter().position(|&n| n == node) {
            let _ = self.nodes.remove(index);
            false
        } else {
            self.nodes.push(node);
            true
        }
    }

    /// Whether `node` is selected.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// Selected nodes in selection order.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Iterate over selected nodes in selection order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of selected nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

/// The element under the cursor, as of the last pointer move.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredElement {
    /// The hovered node.
    pub node: NodeId,
    /// Its lower-case tag name.
    pub tag_name: String,
    /// Its class list.
    pub classes: Vec<String>,
    /// Cursor position in viewport coordinates.
    pub cursor: Point,
}

impl HoveredElement {
    /// Class list joined with spaces, as in a `class` attribute.
    #[must_use]
    pub fn class_text(&self) -> String {
        self.classes.join(" ")
    }
}

/// Everything the user has pointed at or picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Element under the cursor, if any.
    pub hovered: Option<HoveredElement>,
    /// Clicked elements.
    pub selected: SelectionSet,
}

/// Host facts the renderer needs per redraw.
///
/// Passed in explicitly instead of read from ambient globals, and updated
/// only through the inspector's resize and pointer notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostContext {
    /// Viewport size and device pixel ratio.
    pub viewport: Viewport,
    /// Last known cursor position, `None` once the pointer leaves.
    pub cursor: Option<Point>,
}

impl HostContext {
    /// Create a context for `viewport` with no cursor.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(NodeId(3)));
        assert!(selection.toggle(NodeId(1)));
        assert_eq!(selection.as_slice(), &[NodeId(3), NodeId(1)]);

        assert!(!selection.toggle(NodeId(3)));
        assert_eq!(selection.as_slice(), &[NodeId(1)]);
        assert!(!selection.contains(NodeId(3)));
    }

    #[test]
    fn test_class_text_joins_with_spaces() {
        let hovered = HoveredElement {
            node: NodeId(1),
            tag_name: "div".to_string(),
            classes: vec!["a".to_string(), "b".to_string()],
            cursor: Point::new(0.0, 0.0),
        };
        assert_eq!(hovered.class_text(), "a b");
    }
}
