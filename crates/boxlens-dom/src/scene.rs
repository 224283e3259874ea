//! JSON scene files.
//!
//! A scene file describes a rendered page:
//!
//! ```json
//! {
//!   "viewport": { "width": 800, "height": 600, "devicePixelRatio": 2 },
//!   "root": {
//!     "tag": "body",
//!     "rect": { "x": 0, "y": 0, "width": 800, "height": 600 },
//!     "children": [
//!       {
//!         "tag": "div",
//!         "classes": ["row"],
//!         "rect": { "x": 0, "y": 0, "width": 330, "height": 50 },
//!         "style": { "display": "flex", "gap": "10px" },
//!         "children": []
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Style keys may use either the CSS spelling (`flex-direction`) or the
//! CSSOM one (`flexDirection`), and shorthands (`margin`, `gap`, ...) expand.
//! Shorthands are applied before longhands, so `"margin": "4px"` together
//! with `"marginTop": "0px"` leaves only the top margin at zero.

use std::collections::BTreeMap;
use std::path::Path;

use boxlens_common::warning::{clear_warnings, warn_once};
use boxlens_css::{Rect, StyleSnapshot};
use serde::{Deserialize, Serialize};

use crate::{ElementData, NodeId, SceneError, SceneTree};

/// Viewport size and device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    /// Device pixels per CSS pixel.
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f32,
}

const fn default_device_pixel_ratio() -> f32 {
    1.0
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0, 1.0)
    }
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// The viewport as a rectangle at the origin.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// A whole scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    /// Viewport the scene was rendered into.
    #[serde(default)]
    pub viewport: Viewport,
    /// Root element.
    pub root: SceneNode,
}

/// One element in a scene file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    /// Tag name.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Class list.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Border box.
    pub rect: Rect,
    /// Line fragments, if the element wraps.
    #[serde(default)]
    pub fragments: Vec<Rect>,
    /// Resolved style, keyed by property name.
    #[serde(default)]
    pub style: BTreeMap<String, String>,
    /// Children in document order.
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// Box shorthands understood by [`StyleSnapshot::set_property`].
const SHORTHANDS: &[&str] = &["margin", "padding", "border-width", "gap"];

fn default_tag() -> String {
    "div".to_string()
}

impl SceneTree {
    /// Parse and validate a scene from JSON text.
    ///
    /// Resets the warning dedup set, so each scene reports its own
    /// malformed style values. The overlay is attached on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any rectangle is
    /// negative or non-finite.
    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        clear_warnings();
        let document: SceneDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Read, parse, and validate a scene file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or for any reason
    /// [`SceneTree::from_json_str`] fails.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build a tree from an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the viewport or any rectangle is negative or
    /// non-finite.
    pub fn from_document(document: SceneDocument) -> Result<Self, SceneError> {
        let viewport = document.viewport;
        let viewport_rect = Rect {
            x: 0.0,
            y: 0.0,
            width: viewport.width,
            height: viewport.height,
        };
        let _ = validate_rect("viewport", viewport_rect)?;
        if !viewport.device_pixel_ratio.is_finite() || viewport.device_pixel_ratio <= 0.0 {
            return Err(SceneError::NonFinite {
                tag: "viewport".to_string(),
            });
        }

        let mut tree = Self::new(viewport, element_data(&document.root)?);
        for child in &document.root.children {
            build_subtree(&mut tree, NodeId::ROOT, child)?;
        }
        let _ = tree.attach_overlay();

        log::debug!(
            "loaded scene: {} nodes, viewport {}x{} @{}x",
            tree.len(),
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
        Ok(tree)
    }
}

fn build_subtree(tree: &mut SceneTree, parent: NodeId, node: &SceneNode) -> Result<(), SceneError> {
    let id = tree.alloc(element_data(node)?);
    tree.append_child(parent, id);
    for child in &node.children {
        build_subtree(tree, id, child)?;
    }
    Ok(())
}

fn element_data(node: &SceneNode) -> Result<ElementData, SceneError> {
    let tag = node.tag.to_ascii_lowercase();
    let rect = validate_rect(&tag, node.rect)?;
    let fragments = node
        .fragments
        .iter()
        .map(|fragment| validate_rect(&tag, *fragment))
        .collect::<Result<Vec<_>, _>>()?;

    let mut properties: Vec<(String, &str)> = node
        .style
        .iter()
        .map(|(name, value)| (kebab_case(name), value.as_str()))
        .collect();
    properties.sort_by_key(|(property, _)| !SHORTHANDS.contains(&property.as_str()));

    let mut style = StyleSnapshot::default();
    for (property, value) in properties {
        if !style.set_property(&property, value) {
            let _ = warn_once("scene", &format!("unsupported property '{property}' on <{tag}>"));
        }
    }

    Ok(ElementData {
        tag_name: tag,
        classes: node.classes.clone(),
        rect,
        fragments,
        style,
    })
}

/// Reject non-finite coordinates and negative sizes.
fn validate_rect(tag: &str, rect: Rect) -> Result<Rect, SceneError> {
    if ![rect.x, rect.y, rect.width, rect.height]
        .into_iter()
        .all(f32::is_finite)
    {
        return Err(SceneError::NonFinite {
            tag: tag.to_string(),
        });
    }
    if rect.width < 0.0 || rect.height < 0.0 {
        return Err(SceneError::NegativeSize {
            tag: tag.to_string(),
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(rect)
}

/// `flexDirection` -> `flex-direction`. Already kebab-case names pass through.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
