//! Scripted input events.
//!
//! A scene file may carry an `events` array next to its `viewport` and
//! `root`:
//!
//! ```json
//! "events": [
//!   { "type": "pointerMove", "x": 40, "y": 20 },
//!   { "type": "click" },
//!   { "type": "click", "x": 150, "y": 20 },
//!   { "type": "resize", "width": 1024, "height": 768, "devicePixelRatio": 2 },
//!   { "type": "pointerLeave" }
//! ]
//! ```

use boxlens_css::Point;
use boxlens_dom::{SceneTree, Viewport};
use boxlens_overlay::{DrawingSurface, Inspector};
use serde::Deserialize;

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    /// The pointer moved to (`x`, `y`).
    PointerMove {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// The pointer left the page.
    PointerLeave,
    /// A click, at the current hover or after moving to (`x`, `y`).
    Click {
        /// Horizontal position, if the click also moves the pointer.
        #[serde(default)]
        x: Option<f32>,
        /// Vertical position, if the click also moves the pointer.
        #[serde(default)]
        y: Option<f32>,
    },
    /// The viewport changed size or pixel ratio.
    #[serde(rename_all = "camelCase")]
    Resize {
        /// New width in CSS pixels.
        width: f32,
        /// New height in CSS pixels.
        height: f32,
        /// New device pixel ratio.
        #[serde(default = "default_ratio")]
        device_pixel_ratio: f32,
    },
}

const fn default_ratio() -> f32 {
    1.0
}

impl InputEvent {
    /// A click that first moves the pointer to `point`.
    #[must_use]
    pub const fn click_at(point: Point) -> Self {
        Self::Click {
            x: Some(point.x),
            y: Some(point.y),
        }
    }

    /// A pointer move to `point`.
    #[must_use]
    pub const fn move_to(point: Point) -> Self {
        Self::PointerMove {
            x: point.x,
            y: point.y,
        }
    }
}

/// The part of a scene file this module reads.
#[derive(Debug, Default, Deserialize)]
pub struct EventScript {
    /// Events in the order they happen.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Feed `event` to the inspector, keeping the scene's viewport in step.
pub fn apply(
    event: InputEvent,
    inspector: &mut Inspector,
    tree: &mut SceneTree,
    surface: &mut dyn DrawingSurface,
) {
    log::trace!("event {event:?}");
    match event {
        InputEvent::PointerMove { x, y } => inspector.pointer_move(tree, Point::new(x, y)),
        InputEvent::PointerLeave => inspector.pointer_leave(),
        InputEvent::Click { x, y } => {
            if let (Some(x), Some(y)) = (x, y) {
                inspector.pointer_move(tree, Point::new(x, y));
            }
            if inspector.click().is_none() {
                log::info!("click with nothing hovered ignored");
            }
        }
        InputEvent::Resize {
            width,
            height,
            device_pixel_ratio,
        } => {
            let viewport = Viewport::new(width, height, device_pixel_ratio);
            tree.set_viewport(viewport);
            inspector.resize(viewport, surface);
        }
    }
}
