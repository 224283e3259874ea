//! Scene tree for the boxlens inspector.
//!
//! A scene is a snapshot of a rendered page: every element's tag, classes,
//! border box, fragment boxes, and resolved style, plus the viewport it was
//! rendered into. The inspector never owns page elements; it only holds
//! [`NodeId`] handles into a [`SceneTree`].
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. The
//! overlay surface itself is a node of the tree, attached last so it sits on
//! top of everything, which is what makes hit-testing through it a real
//! concern.

mod error;
mod scene;

pub use error::SceneError;
pub use scene::{SceneDocument, SceneNode, Viewport};

use boxlens_css::{DisplayValue, Point, Rect, StyleSnapshot};

/// A handle to a node in a [`SceneTree`].
///
/// Equality is identity: two handles are equal only if they name the same
/// arena slot, regardless of what the nodes contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root element is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// What the page reports about one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
    /// Lower-case tag name.
    pub tag_name: String,
    /// Class list in attribute order.
    pub classes: Vec<String>,
    /// Border box in viewport coordinates.
    pub rect: Rect,
    /// One rectangle per line box for elements that wrap across lines.
    /// Empty when the element is not fragmented.
    pub fragments: Vec<Rect>,
    /// Resolved style.
    pub style: StyleSnapshot,
}

impl ElementData {
    /// An unfragmented element with the initial style.
    #[must_use]
    pub fn new(tag_name: &str, rect: Rect) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            rect,
            ..Self::default()
        }
    }

    /// Builder: set the class list.
    #[must_use]
    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.classes = classes.iter().map(|c| (*c).to_string()).collect();
        self
    }

    /// Builder: set the resolved style.
    #[must_use]
    pub fn with_style(mut self, style: StyleSnapshot) -> Self {
        self.style = style;
        self
    }

    /// Builder: set the fragment rectangles.
    #[must_use]
    pub fn with_fragments(mut self, fragments: Vec<Rect>) -> Self {
        self.fragments = fragments;
        self
    }

    /// Whether the element's border box or any fragment contains `point`.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point) || self.fragments.iter().any(|f| f.contains(point))
    }
}

/// A node in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// The element this node describes.
    pub data: ElementData,
    /// Parent node, `None` for the root and detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Whether this node is the inspector's own drawing surface.
    pub is_overlay: bool,
}

/// Arena-based scene tree with O(1) node access.
///
/// Also plays the page's part in hit testing: [`SceneTree::topmost_node_at`]
/// answers "which element is under the cursor" the way a browser's
/// `elementFromPoint` would, overlay included unless its pointer events
/// are switched off.
#[derive(Debug, Clone)]
pub struct SceneTree {
    /// All nodes, indexed by `NodeId`. The root is always at index 0.
    nodes: Vec<Node>,
    viewport: Viewport,
    overlay: Option<NodeId>,
    overlay_pointer_events: bool,
}

impl SceneTree {
    /// Create a tree holding only the root element.
    #[must_use]
    pub fn new(viewport: Viewport, root: ElementData) -> Self {
        Self {
            nodes: vec![Node {
                data: root,
                parent: None,
                children: Vec::new(),
                is_overlay: false,
            }],
            viewport,
            overlay: None,
            overlay_pointer_events: true,
        }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get element data by node ID.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).map(|node| &node.data)
    }

    /// Get mutable element data by node ID.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id.0).map(|node| &mut node.data)
    }

    /// Get the number of nodes in the tree, overlay included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, data: ElementData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
            is_overlay: false,
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Unknown IDs are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            log::debug!("append_child ignored: {parent:?} or {child:?} out of range");
            return;
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node, overlay included when asking the root.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Fragment rectangles of a node, or its border box alone when the
    /// node is not fragmented.
    #[must_use]
    pub fn fragment_rects(&self, id: NodeId) -> Vec<Rect> {
        match self.element(id) {
            Some(data) if data.fragments.is_empty() => vec![data.rect],
            Some(data) => data.fragments.clone(),
            None => Vec::new(),
        }
    }

    /// The viewport the scene was rendered into.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport. The overlay, if attached, follows it.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(overlay) = self.overlay
            && let Some(data) = self.element_mut(overlay)
        {
            data.rect = viewport.rect();
        }
    }

    /// Attach the inspector's drawing surface as the last child of the root,
    /// covering the whole viewport. Attaching twice returns the existing node.
    pub fn attach_overlay(&mut self) -> NodeId {
        if let Some(overlay) = self.overlay {
            return overlay;
        }
        let data = ElementData::new("canvas", self.viewport.rect()).with_classes(&["boxlens-overlay"]);
        let id = self.alloc(data);
        self.nodes[id.0].is_overlay = true;
        self.append_child(NodeId::ROOT, id);
        self.overlay = Some(id);
        id
    }

    /// The overlay node, if attached.
    #[must_use]
    pub const fn overlay(&self) -> Option<NodeId> {
        self.overlay
    }

    /// Whether `id` is the overlay node.
    #[must_use]
    pub fn is_overlay(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.is_overlay)
    }

    /// [CSS UI § 7.1 pointer-events](https://www.w3.org/TR/css-ui-4/#pointer-events-control)
    ///
    /// Toggle whether the overlay takes part in hit testing.
    pub fn set_overlay_pointer_events(&mut self, enabled: bool) {
        self.overlay_pointer_events = enabled;
    }

    /// Whether the overlay currently takes part in hit testing.
    #[must_use]
    pub const fn overlay_pointer_events(&self) -> bool {
        self.overlay_pointer_events
    }

    /// [CSSOM View § 5 elementFromPoint()](https://www.w3.org/TR/cssom-view-1/#dom-document-elementfrompoint)
    ///
    /// The topmost node whose border box or fragments contain `point`.
    /// Later siblings paint over earlier ones and descendants over their
    /// ancestors. The overlay is skipped while its pointer events are off;
    /// `display: none` elements are never hit.
    #[must_use]
    pub fn topmost_node_at(&self, point: Point) -> Option<NodeId> {
        self.hit_test(NodeId::ROOT, point)
    }

    fn hit_test(&self, id: NodeId, point: Point) -> Option<NodeId> {
        let node = self.get(id)?;
        if node.is_overlay && !self.overlay_pointer_events {
            return None;
        }
        if node.data.style.display() == DisplayValue::None {
            return None;
        }
        node.children
            .iter()
            .rev()
            .find_map(|&child| self.hit_test(child, point))
            .or_else(|| node.data.contains(point).then_some(id))
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a SceneTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
