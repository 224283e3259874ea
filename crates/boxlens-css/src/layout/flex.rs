//! Flexbox gap detection.
//!
//! [§ 9 Flex Layout Algorithm](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm)
//!
//! The page has already laid the items out; this module only reads back
//! their border boxes and finds the empty space between them:
//! - gaps between consecutive items along the main axis
//! - gaps between wrapped flex lines along the cross axis
//! - the leftover space after the last item
//!
//! Items are visited in `order`-modified document order, which is the order
//! they are visually adjacent in.

use super::box_model::Rect;
use super::gaps::{ChildGeometry, GapBand, GapKind};
use crate::style::StyleSnapshot;

/// Items whose cross-start edges differ by at most this much share a line.
const LINE_TOLERANCE: f32 = 1.0;

/// [§ 2 Flex Layout Box Model and Terminology](https://www.w3.org/TR/css-flexbox-1/#box-model)
///
/// Maps main/cross-axis coordinates onto physical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Main axis horizontal.
    Row,
    /// Main axis vertical.
    Column,
}

impl Axis {
    const fn main_start(self, rect: &Rect) -> f32 {
        match self {
            Self::Row => rect.left(),
            Self::Column => rect.top(),
        }
    }

    const fn main_end(self, rect: &Rect) -> f32 {
        match self {
            Self::Row => rect.right(),
            Self::Column => rect.bottom(),
        }
    }

    const fn cross_start(self, rect: &Rect) -> f32 {
        match self {
            Self::Row => rect.top(),
            Self::Column => rect.left(),
        }
    }

    const fn cross_end(self, rect: &Rect) -> f32 {
        match self {
            Self::Row => rect.bottom(),
            Self::Column => rect.right(),
        }
    }

    /// Build a physical rectangle from main-axis and cross-axis intervals.
    fn rect(self, main: (f32, f32), cross: (f32, f32)) -> Rect {
        match self {
            Self::Row => Rect::from_ltrb(main.0, cross.0, main.1, cross.1),
            Self::Column => Rect::from_ltrb(cross.0, main.0, cross.1, main.1),
        }
    }
}

/// Compute flex gap bands for a container.
///
/// `children` are in document order; `parent` is the container's border box.
/// Fewer than two children yields no bands.
#[must_use]
pub fn compute_flex_gaps(
    children: &[ChildGeometry],
    parent: Rect,
    style: &StyleSnapshot,
    min_gap: f32,
) -> Vec<GapBand> {
    if children.len() < 2 {
        return Vec::new();
    }

    let axis = if style.flex_direction().is_row() {
        Axis::Row
    } else {
        Axis::Column
    };
    let content = style.content_box_of(parent);

    // [§ 5.4 'order'](https://www.w3.org/TR/css-flexbox-1/#order-property)
    //
    // "Flex items with the same ordinal group are laid out in the order they
    // appear in the source document." `sort_by_key` is stable, so ties keep
    // document order.
    let mut ordered: Vec<&ChildGeometry> = children.iter().collect();
    ordered.sort_by_key(|child| child.order);
    let items: Vec<&Rect> = ordered.iter().map(|child| &child.rect).collect();

    let mut bands = Vec::new();

    // STEP 1: Gaps between wrapped lines.
    if style.flex_wrap().is_wrapping() {
        let lines = group_into_lines(&items, axis);
        for pair in lines.windows(2) {
            let start = pair[0]
                .iter()
                .map(|rect| axis.cross_end(rect))
                .fold(f32::NEG_INFINITY, f32::max);
            let end = pair[1]
                .iter()
                .map(|rect| axis.cross_start(rect))
                .fold(f32::INFINITY, f32::min);
            if end - start >= min_gap {
                let full_main = (axis.main_start(&content), axis.main_end(&content));
                bands.push(GapBand::new(axis.rect(full_main, (start, end)), GapKind::FlexLine));
            }
        }
    }

    // STEP 2: Gaps between consecutive items, across line boundaries too.
    // Items on different lines produce a negative gap and are skipped.
    for pair in items.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let gap = axis.main_start(next) - axis.main_end(current);
        if gap >= min_gap {
            let cross = (
                axis.cross_start(current).min(axis.cross_start(next)),
                axis.cross_end(current).max(axis.cross_end(next)),
            );
            let main = (axis.main_end(current), axis.main_start(next));
            bands.push(GapBand::new(axis.rect(main, cross), GapKind::FlexItem));
        }
    }

    // STEP 3: Space left over after the last item.
    if let Some(last) = items.last() {
        let trailing = axis.main_end(&content) - axis.main_end(last);
        if trailing >= min_gap {
            let main = (axis.main_end(last), axis.main_end(&content));
            let cross = (axis.cross_start(last), axis.cross_end(last));
            bands.push(GapBand::new(axis.rect(main, cross), GapKind::FlexTrailing));
        }
    }

    log::trace!("flex gaps ({axis:?}): {bands:?}");
    bands
}

/// [§ 9.3 Main Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-line-break)
///
/// Recover flex lines from laid-out items: walking in visual order, an item
/// whose cross-start edge moves more than [`LINE_TOLERANCE`] away from the
/// current line's first item starts a new line.
fn group_into_lines<'a>(items: &[&'a Rect], axis: Axis) -> Vec<Vec<&'a Rect>> {
    let mut lines: Vec<Vec<&Rect>> = Vec::new();
    let mut current: Vec<&Rect> = Vec::new();
    let Some(first) = items.first() else {
        return lines;
    };
    let mut line_edge = axis.cross_start(first);

    for &rect in items {
        let edge = axis.cross_start(rect);
        if (edge - line_edge).abs() > LINE_TOLERANCE {
            lines.push(std::mem::take(&mut current));
            line_edge = edge;
        }
        current.push(rect);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_into_lines_by_top_edge() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.5, 10.0, 10.0),
            Rect::new(0.0, 20.0, 10.0, 10.0),
            Rect::new(20.0, 20.0, 10.0, 10.0),
            Rect::new(0.0, 40.0, 10.0, 10.0),
        ];
        let refs: Vec<&Rect> = rects.iter().collect();
        let lines = group_into_lines(&refs, Axis::Row);
        let sizes: Vec<usize> = lines.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_group_into_lines_column_uses_left_edge() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 20.0, 10.0, 10.0),
            Rect::new(30.0, 0.0, 10.0, 10.0),
        ];
        let refs: Vec<&Rect> = rects.iter().collect();
        let lines = group_into_lines(&refs, Axis::Column);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_axis_rect_swaps_for_column() {
        let rect = Axis::Column.rect((10.0, 20.0), (0.0, 5.0));
        assert_eq!(rect, Rect::new(0.0, 10.0, 5.0, 10.0));
    }
}
