//! Grid gutter detection.
//!
//! [§ 10.1 Gutters: the row-gap, column-gap, and gap properties](https://www.w3.org/TR/css-grid-1/#gutters)
//!
//! Unlike flex gaps, grid gutters are not read back from the items. The
//! resolved `grid-template-*` values already list every track's used size,
//! so the gutters fall out of walking the tracks from the content-box origin.

use super::box_model::Rect;
use super::gaps::{ChildGeometry, GapBand, GapKind};
use crate::style::StyleSnapshot;

/// Compute grid gutter bands for a container.
///
/// Column gutters span the content box's full height, row gutters its full
/// width. Fewer than two children yields no bands.
#[must_use]
pub fn compute_grid_gaps(
    children: &[ChildGeometry],
    parent: Rect,
    style: &StyleSnapshot,
    min_gap: f32,
) -> Vec<GapBand> {
    if children.len() < 2 {
        return Vec::new();
    }

    let content = style.content_box_of(parent);
    let columns = style.grid_template_columns();
    let rows = style.grid_template_rows();

    let mut bands = Vec::new();

    for (start, end) in gutter_intervals(&columns.sizes, style.column_gap(), content.left()) {
        if end - start >= min_gap {
            bands.push(GapBand::new(
                Rect::from_ltrb(start, content.top(), end, content.bottom()),
                GapKind::GridColumn,
            ));
        }
    }

    for (start, end) in gutter_intervals(&rows.sizes, style.row_gap(), content.top()) {
        if end - start >= min_gap {
            bands.push(GapBand::new(
                Rect::from_ltrb(content.left(), start, content.right(), end),
                GapKind::GridRow,
            ));
        }
    }

    log::trace!(
        "grid gaps: {} columns, {} rows, {} bands",
        columns.len(),
        rows.len(),
        bands.len()
    );
    bands
}

/// Compute the start offset of each track from track sizes and the gutter.
fn track_offsets(sizes: &[f32], gap: f32, start: f32) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut pos = start;
    for (i, &size) in sizes.iter().enumerate() {
        offsets.push(pos);
        pos += size;
        if i + 1 < sizes.len() {
            pos += gap;
        }
    }
    offsets
}

/// The `(after track i, before track i + 1)` interval for every pair of
/// adjacent tracks.
fn gutter_intervals(sizes: &[f32], gap: f32, start: f32) -> Vec<(f32, f32)> {
    let offsets = track_offsets(sizes, gap, start);
    offsets
        .windows(2)
        .zip(sizes)
        .map(|(pair, &size)| (pair[0] + size, pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_offsets_include_gaps() {
        let offsets = track_offsets(&[100.0, 50.0, 25.0], 10.0, 5.0);
        assert_eq!(offsets, vec![5.0, 115.0, 175.0]);
    }

    #[test]
    fn test_gutter_intervals_between_tracks() {
        let gutters = gutter_intervals(&[100.0, 50.0, 25.0], 10.0, 0.0);
        assert_eq!(gutters, vec![(100.0, 110.0), (160.0, 170.0)]);
    }

    #[test]
    fn test_single_track_has_no_gutters() {
        assert!(gutter_intervals(&[100.0], 10.0, 0.0).is_empty());
        assert!(gutter_intervals(&[], 10.0, 0.0).is_empty());
    }
}
