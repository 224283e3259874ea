//! Overlay renderer - generates a display list from selection state.
//!
//! The renderer queries the page for fresh rectangles and styles on every
//! call and records drawing commands in a fixed back-to-front order:
//!
//! 1. Guide lines through every edge of every selected element
//! 2. Outline and corner handles per fragment of every selected element
//! 3. Box model bands of the hovered element
//! 4. Gap bands of the hovered element, if it is a flex or grid container
//! 5. Dotted hatching over those gap bands
//! 6. The hover tooltip
//!
//! Selected elements never get box model bands, and hovering never draws
//! guides.

use boxlens_css::{
    BoxModelBands, BoxModelCalculator, ChildGeometry, DisplayValue, ElementBox, GapBand,
    GapDetector, GapKind, LayoutMode, Point, Rect,
};
use boxlens_dom::NodeId;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::config::OverlayConfig;
use crate::display_list::{DisplayList, OverlayCommand};
use crate::provider::GeometryProvider;
use crate::state::{HostContext, HoveredElement, SelectionState};

/// Average glyph advance as a fraction of the font size, used to size the
/// tooltip background without measuring text.
const GLYPH_ADVANCE: f32 = 0.6;

/// Tooltip line height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// One of the overlay's paint layers, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Layer {
    /// Dashed guide lines.
    Guides,
    /// Selection outlines and handles.
    Outlines,
    /// Hovered element's box model.
    BoxModel,
    /// Hovered container's gap bands.
    Gaps,
    /// Hatching over gap bands.
    Hatching,
    /// Hover tooltip.
    Tooltip,
}

/// Renderer that generates a display list for one redraw.
///
/// Borrows the visual constants; all geometry comes from the provider
/// passed to [`OverlayRenderer::paint`].
pub struct OverlayRenderer<'a> {
    config: &'a OverlayConfig,
}

impl<'a> OverlayRenderer<'a> {
    /// Create a renderer with the given visual constants.
    #[must_use]
    pub const fn new(config: &'a OverlayConfig) -> Self {
        Self { config }
    }

    /// Paint the whole overlay and return the display list.
    ///
    /// The list always starts with [`OverlayCommand::Clear`], so replaying
    /// it onto a surface that still shows the previous frame is safe.
    #[must_use]
    pub fn paint<P>(&self, page: &P, state: &SelectionState, host: &HostContext) -> DisplayList
    where
        P: GeometryProvider + ?Sized,
    {
        let mut display_list = DisplayList::new();
        display_list.push(OverlayCommand::Clear);

        let hovered = state.hovered.as_ref();
        let mut gaps = Vec::new();
        for layer in Layer::iter() {
            match (layer, hovered) {
                (Layer::Guides, _) => self.paint_guides(page, state, host, &mut display_list),
                (Layer::Outlines, _) => self.paint_outlines(page, state, &mut display_list),
                (Layer::BoxModel, Some(hovered)) => {
                    let bands = Self::box_model_bands(page, hovered.node);
                    self.paint_box_model(&bands, &mut display_list);
                }
                (Layer::Gaps, Some(hovered)) => {
                    gaps = self.gap_bands(page, hovered.node);
                    self.paint_gaps(&gaps, &mut display_list);
                }
                (Layer::Hatching, Some(_)) => self.paint_hatching(&gaps, &mut display_list),
                (Layer::Tooltip, Some(hovered)) => self.paint_tooltip(hovered, &mut display_list),
                (_, None) => {}
            }
        }

        log::debug!(
            "painted {} commands for {} selected, hovered {:?}",
            display_list.len(),
            state.selected.len(),
            state.hovered.as_ref().map(|hovered| hovered.node)
        );
        display_list
    }

    /// Box model bands of `node`, measured against its parent when it has one.
    #[must_use]
    pub fn box_model_bands<P>(page: &P, node: NodeId) -> BoxModelBands
    where
        P: GeometryProvider + ?Sized,
    {
        let style = page.style_of(node);
        let parent = page
            .parent_of(node)
            .map(|parent| (page.rect_of(parent), page.style_of(parent)));

        BoxModelCalculator::compute(
            ElementBox::new(page.rect_of(node), &style),
            parent
                .as_ref()
                .map(|(rect, style)| ElementBox::new(*rect, style)),
        )
    }

    /// Gap bands of `node`, empty unless it is a flex or grid container.
    ///
    /// Children with `display: none` take no space and are left out.
    #[must_use]
    pub fn gap_bands<P>(&self, page: &P, node: NodeId) -> Vec<GapBand>
    where
        P: GeometryProvider + ?Sized,
    {
        let style = page.style_of(node);
        if LayoutMode::of(&style).is_none() {
            return Vec::new();
        }

        let children: Vec<ChildGeometry> = page
            .children_of(node)
            .into_iter()
            .filter_map(|child| {
                let child_style = page.style_of(child);
                (child_style.display() != DisplayValue::None)
                    .then(|| ChildGeometry::new(page.rect_of(child), child_style.order()))
            })
            .collect();

        GapDetector::new(self.config.min_gap).detect(&children, page.rect_of(node), &style)
    }

    /// Dashed lines through the left, right, top, and bottom edge of every
    /// selected element, spanning the viewport.
    fn paint_guides<P>(
        &self,
        page: &P,
        state: &SelectionState,
        host: &HostContext,
        display_list: &mut DisplayList,
    ) where
        P: GeometryProvider + ?Sized,
    {
        if state.selected.is_empty() {
            return;
        }
        let guide = &self.config.guide;
        let viewport = host.viewport;

        display_list.push(OverlayCommand::SetLineDash {
            pattern: guide.dash.clone(),
        });
        for node in state.selected.iter() {
            let rect = page.rect_of(node);
            for x in [rect.left(), rect.right()] {
                let x = snap(x);
                display_list.push(OverlayCommand::StrokeLine {
                    from: Point::new(x, 0.0),
                    to: Point::new(x, viewport.height),
                    paint: guide.paint,
                    line_width: guide.line_width,
                });
            }
            for y in [rect.top(), rect.bottom()] {
                let y = snap(y);
                display_list.push(OverlayCommand::StrokeLine {
                    from: Point::new(0.0, y),
                    to: Point::new(viewport.width, y),
                    paint: guide.paint,
                    line_width: guide.line_width,
                });
            }
        }
        display_list.push(OverlayCommand::SetLineDash {
            pattern: Vec::new(),
        });
        log::trace!("{}: {} selected", Layer::Guides, state.selected.len());
    }

    /// One outline and four corner handles per fragment. An inline element
    /// wrapped over three lines gets three outlines.
    fn paint_outlines<P>(&self, page: &P, state: &SelectionState, display_list: &mut DisplayList)
    where
        P: GeometryProvider + ?Sized,
    {
        let outline = &self.config.outline;
        let radius = outline.handle_size / 2.0;

        for node in state.selected.iter() {
            for fragment in page.fragment_rects_of(node) {
                display_list.push(OverlayCommand::StrokeRect {
                    rect: fragment,
                    paint: outline.paint,
                    line_width: outline.line_width,
                });
                for center in corners(fragment) {
                    display_list.push(OverlayCommand::FillCircle {
                        center,
                        radius,
                        paint: outline.paint,
                    });
                }
            }
        }
    }

    /// Margin, border, and padding strips, then the content band.
    fn paint_box_model(&self, bands: &BoxModelBands, display_list: &mut DisplayList) {
        let config = self.config;
        let layers = [
            (bands.margin.to_array(), config.margin),
            (bands.border.to_array(), config.border),
            (bands.padding.to_array(), config.padding),
        ];

        for (strips, paint) in layers {
            for rect in strips {
                if rect.is_visible(config.min_gap) {
                    display_list.push(OverlayCommand::FillRect { rect, paint });
                }
            }
        }
        if bands.content.is_visible(config.min_gap) {
            display_list.push(OverlayCommand::FillRect {
                rect: bands.content,
                paint: config.content,
            });
        }
        log::trace!("{}: content band {:?}", Layer::BoxModel, bands.content);
    }

    /// Translucent fill per gap band. Flex line gaps use the darker paint.
    fn paint_gaps(&self, gaps: &[GapBand], display_list: &mut DisplayList) {
        for band in gaps {
            let paint = match band.kind {
                GapKind::FlexLine => self.config.line_gap,
                _ => self.config.gap,
            };
            display_list.push(OverlayCommand::FillRect {
                rect: band.rect,
                paint,
            });
        }
        if !gaps.is_empty() {
            log::trace!("{}: {} bands", Layer::Gaps, gaps.len());
        }
    }

    /// A grid of square dots over every gap band, starting at the band's
    /// top-left corner.
    fn paint_hatching(&self, gaps: &[GapBand], display_list: &mut DisplayList) {
        let hatch = &self.config.hatch;
        if hatch.dot_size <= 0.0 {
            return;
        }

        for band in gaps {
            let rect = band.rect;
            let columns = dot_count(rect.width, hatch.dot_spacing);
            let rows = dot_count(rect.height, hatch.dot_spacing);
            for row in 0..rows {
                let y = rect.top() + row as f32 * hatch.dot_spacing;
                for column in 0..columns {
                    let x = rect.left() + column as f32 * hatch.dot_spacing;
                    display_list.push(OverlayCommand::FillRect {
                        rect: Rect::new(x, y, hatch.dot_size, hatch.dot_size),
                        paint: hatch.paint,
                    });
                }
            }
        }
    }

    /// Tag name, then the class list if there is one, in a dark box offset
    /// from the cursor.
    fn paint_tooltip(&self, hovered: &HoveredElement, display_list: &mut DisplayList) {
        let tooltip = &self.config.tooltip;

        let mut lines = vec![hovered.tag_name.clone()];
        let class_text = hovered.class_text();
        if !class_text.is_empty() {
            lines.push(class_text);
        }

        let longest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_height = tooltip.font_size * LINE_HEIGHT;
        let origin = Point::new(
            hovered.cursor.x + tooltip.offset,
            hovered.cursor.y + tooltip.offset,
        );

        display_list.push(OverlayCommand::FillRect {
            rect: Rect::new(
                origin.x,
                origin.y,
                longest as f32 * tooltip.font_size * GLYPH_ADVANCE + 2.0 * tooltip.padding,
                lines.len() as f32 * line_height + 2.0 * tooltip.padding,
            ),
            paint: tooltip.background,
        });

        for (index, text) in lines.into_iter().enumerate() {
            let baseline =
                origin.y + tooltip.padding + tooltip.font_size + index as f32 * line_height;
            display_list.push(OverlayCommand::FillText {
                origin: Point::new(origin.x + tooltip.padding, baseline),
                text,
                font_size: tooltip.font_size,
                paint: tooltip.text,
            });
        }
        log::trace!("{}: <{}>", Layer::Tooltip, hovered.tag_name);
    }
}

/// Center a 1-unit stroke on a pixel so it is not smeared over two.
fn snap(edge: f32) -> f32 {
    edge.floor() + 0.5
}

/// Top-left, top-right, bottom-right, bottom-left.
fn corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.left(), rect.top()),
        Point::new(rect.right(), rect.top()),
        Point::new(rect.right(), rect.bottom()),
        Point::new(rect.left(), rect.bottom()),
    ]
}

/// How many dot origins `start + i * spacing` fall before `start + extent`.
fn dot_count(extent: f32, spacing: f32) -> usize {
    if extent <= 0.0 || spacing <= 0.0 || !extent.is_finite() {
        return 0;
    }
    (extent / spacing).ceil() as usize
}
