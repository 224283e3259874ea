//! The inspector session: events in, redraws out.
//!
//! Everything is synchronous and single-threaded. Each handler updates
//! [`SelectionState`] or [`HostContext`] and raises a redraw request when
//! something visible changed; the host decides when to call
//! [`Inspector::redraw`].

use boxlens_css::Point;
use boxlens_dom::Viewport;

use crate::config::OverlayConfig;
use crate::display_list::DisplayList;
use crate::provider::{GeometryProvider, HitTestHost};
use crate::renderer::OverlayRenderer;
use crate::state::{HostContext, HoveredElement, SelectionSet, SelectionState};
use crate::surface::DrawingSurface;

/// An inspector attached to one page.
#[derive(Debug, Clone)]
pub struct Inspector {
    config: OverlayConfig,
    state: SelectionState,
    host: HostContext,
    needs_redraw: bool,
}

impl Inspector {
    /// Create a session for a page shown in `viewport`.
    ///
    /// A new session wants its first frame drawn.
    #[must_use]
    pub fn new(config: OverlayConfig, viewport: Viewport) -> Self {
        Self {
            config,
            state: SelectionState::default(),
            host: HostContext::new(viewport),
            needs_redraw: true,
        }
    }

    /// Visual constants in use.
    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Current hover and selection.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current viewport and cursor.
    #[must_use]
    pub const fn host(&self) -> &HostContext {
        &self.host
    }

    /// The hovered element, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<&HoveredElement> {
        self.state.hovered.as_ref()
    }

    /// Selected elements in selection order.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.state.selected
    }

    /// Whether a redraw has been requested since the last one.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Return and reset the redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Handle the pointer moving to `point`.
    ///
    /// The overlay sits on top of the page, so it is taken out of hit testing
    /// for the duration of the query. Otherwise it would always be the
    /// topmost node. If the query still lands on the overlay, or on nothing,
    /// the hover is cleared.
    pub fn pointer_move<H>(&mut self, page: &mut H, point: Point)
    where
        H: HitTestHost + GeometryProvider + ?Sized,
    {
        page.set_overlay_pointer_events(false);
        let target = page.topmost_node_at(point);
        page.set_overlay_pointer_events(true);

        let hovered = target
            .filter(|&node| !page.is_overlay(node))
            .map(|node| HoveredElement {
                node,
                tag_name: page.tag_name_of(node),
                classes: page.class_list_of(node),
                cursor: point,
            });

        self.host.cursor = Some(point);

        if self.state.hovered != hovered {
            let previous = self.state.hovered.as_ref().map(|element| element.node);
            let current = hovered.as_ref().map(|element| element.node);
            if previous != current {
                log::debug!("hover {previous:?} -> {current:?} at ({}, {})", point.x, point.y);
            }
            self.state.hovered = hovered;
            self.needs_redraw = true;
        }
    }

    /// Handle the pointer leaving the page.
    pub fn pointer_leave(&mut self) {
        self.host.cursor = None;
        if let Some(previous) = self.state.hovered.take() {
            log::debug!("hover {:?} -> none (pointer left)", previous.node);
            self.needs_redraw = true;
        }
    }

    /// Toggle the hovered element in the selection.
    ///
    /// Returns whether it is selected afterwards, or `None` if nothing is
    /// hovered.
    pub fn click(&mut self) -> Option<bool> {
        let node = self.state.hovered.as_ref()?.node;
        let selected = self.state.selected.toggle(node);
        log::debug!(
            "{} {node:?}, {} selected",
            if selected { "selected" } else { "deselected" },
            self.state.selected.len()
        );
        self.needs_redraw = true;
        Some(selected)
    }

    /// Handle a viewport change.
    ///
    /// The surface is re-provisioned before anything else so the next redraw
    /// already lands on the new backing store.
    pub fn resize(&mut self, viewport: Viewport, surface: &mut dyn DrawingSurface) {
        surface.resize(viewport.width, viewport.height, viewport.device_pixel_ratio);
        log::debug!(
            "resized to {}x{} @{}x",
            viewport.width,
            viewport.height,
            viewport.device_pixel_ratio
        );
        self.host.viewport = viewport;
        self.needs_redraw = true;
    }

    /// Recompute the overlay from the page, draw it on `surface`, and clear
    /// the redraw request.
    ///
    /// Nothing from earlier frames is reused.
    pub fn redraw<P>(&mut self, page: &P, surface: &mut dyn DrawingSurface) -> DisplayList
    where
        P: GeometryProvider + ?Sized,
    {
        let display_list = OverlayRenderer::new(&self.config).paint(page, &self.state, &self.host);
        display_list.replay(surface);
        self.needs_redraw = false;
        display_list
    }
}
