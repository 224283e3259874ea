//! Integration tests for box-model bands.

use boxlens_css::{BoxModelCalculator, ElementBox, Rect, StyleSnapshot};

fn row_flex_parent(align_items: &str) -> StyleSnapshot {
    StyleSnapshot::default()
        .with("display", "flex")
        .with("align-items", align_items)
}

// ---------------------------------------------------------------------------
// Band geometry
//
// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)

#[test]
fn test_bands_nest_from_border_box() {
    let style = StyleSnapshot::default()
        .with("margin", "10px")
        .with("border-width", "2px")
        .with("padding", "5px");
    let rect = Rect::new(100.0, 100.0, 200.0, 100.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);

    assert_eq!(bands.dimensions.margin_box(), Rect::new(90.0, 90.0, 220.0, 120.0));
    assert_eq!(bands.dimensions.border_box(), rect);
    assert_eq!(bands.dimensions.padding_box(), Rect::new(102.0, 102.0, 196.0, 96.0));
    assert_eq!(bands.dimensions.content_box(), Rect::new(107.0, 107.0, 186.0, 86.0));
    assert_eq!(bands.content, bands.dimensions.content_box());
}

#[test]
fn test_margin_strips_tile_margin_area() {
    let style = StyleSnapshot::default().with("margin", "4px 8px 12px 16px");
    let rect = Rect::new(0.0, 0.0, 50.0, 40.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);

    let margin_box = bands.dimensions.margin_box();
    assert_eq!(bands.margin.top, Rect::from_ltrb(-16.0, -4.0, 58.0, 0.0));
    assert_eq!(bands.margin.bottom, Rect::from_ltrb(-16.0, 40.0, 58.0, 52.0));
    assert_eq!(bands.margin.left, Rect::from_ltrb(-16.0, 0.0, 0.0, 40.0));
    assert_eq!(bands.margin.right, Rect::from_ltrb(50.0, 0.0, 58.0, 40.0));
    assert_eq!(bands.margin.area(), margin_box.area() - rect.area());
}

#[test]
fn test_border_and_padding_strips_tile() {
    let style = StyleSnapshot::default()
        .with("border-width", "1px 2px 3px 4px")
        .with("padding", "5px 6px 7px 8px");
    let rect = Rect::new(10.0, 20.0, 80.0, 60.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);
    let dims = bands.dimensions;

    assert_eq!(
        bands.border.area(),
        dims.border_box().area() - dims.padding_box().area()
    );
    assert_eq!(
        bands.padding.area(),
        dims.padding_box().area() - dims.content_box().area()
    );
}

#[test]
fn test_oversized_padding_collapses_content() {
    let style = StyleSnapshot::default().with("padding", "30px");
    let rect = Rect::new(0.0, 0.0, 40.0, 40.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);

    assert_eq!(bands.content.area(), 0.0);
    assert_eq!(bands.padding.area(), rect.area());
}

#[test]
fn test_negative_padding_and_border_clamp_to_zero() {
    let style = StyleSnapshot::default()
        .with("padding", "-5px")
        .with("border-width", "-2px");
    let rect = Rect::new(0.0, 0.0, 40.0, 40.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);

    assert_eq!(bands.content, rect);
    assert_eq!(bands.border.area(), 0.0);
    assert_eq!(bands.padding.area(), 0.0);
}

#[test]
fn test_unparsable_edges_are_zero() {
    let style = StyleSnapshot::default()
        .with("margin", "auto")
        .with("padding", "garbage");
    let rect = Rect::new(5.0, 5.0, 10.0, 10.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);

    assert_eq!(bands.dimensions.margin_box(), rect);
    assert_eq!(bands.content, rect);
}

// ---------------------------------------------------------------------------
// Alignment-aware content band
//
// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)

#[test]
fn test_stretch_fills_parent_content_height() {
    let parent_style = row_flex_parent("stretch");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("margin", "5px 0px");
    let child = ElementBox::new(Rect::new(10.0, 5.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(10.0, 5.0, 50.0, 90.0));
}

#[test]
fn test_flex_start_uses_own_margin_top() {
    let parent_style = row_flex_parent("flex-start");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("margin-top", "3px");
    let child = ElementBox::new(Rect::new(0.0, 40.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 3.0, 50.0, 20.0));
}

#[test]
fn test_flex_end_uses_own_margin_bottom() {
    let parent_style = row_flex_parent("flex-end");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("margin-bottom", "4px");
    let child = ElementBox::new(Rect::new(0.0, 0.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 76.0, 50.0, 20.0));
}

#[test]
fn test_center_in_parent_content_box() {
    let parent_style = row_flex_parent("center").with("padding", "10px");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 120.0), &parent_style);
    let child_style = StyleSnapshot::default();
    let child = ElementBox::new(Rect::new(10.0, 10.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    // Parent content box is y=10..110, so (100 - 20) / 2 below its top.
    assert_eq!(bands.content, Rect::new(10.0, 50.0, 50.0, 20.0));
}

#[test]
fn test_align_self_overrides_parent() {
    let parent_style = row_flex_parent("stretch");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("align-self", "flex-end");
    let child = ElementBox::new(Rect::new(0.0, 0.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 80.0, 50.0, 20.0));
}

#[test]
fn test_flex_basis_overrides_height() {
    let parent_style = row_flex_parent("center");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("flex-basis", "30px");
    let child = ElementBox::new(Rect::new(0.0, 0.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 35.0, 50.0, 30.0));
}

#[test]
fn test_zero_flex_basis_keeps_height() {
    let parent_style = row_flex_parent("flex-start");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("flex-basis", "0px");
    let child = ElementBox::new(Rect::new(0.0, 0.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content.height, 20.0);
}

#[test]
fn test_content_band_excludes_own_border_and_padding() {
    let parent_style = row_flex_parent("flex-start");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default()
        .with("border-width", "2px")
        .with("padding", "3px");
    let child = ElementBox::new(Rect::new(0.0, 0.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(5.0, 5.0, 40.0, 10.0));
}

#[test]
fn test_normal_alignment_keeps_reported_position() {
    let parent_style = row_flex_parent("normal");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default();
    let rect = Rect::new(0.0, 12.0, 50.0, 20.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &child_style), Some(parent));

    assert_eq!(bands.content, rect);
}

#[test]
fn test_baseline_item_takes_stretch_from_parent() {
    let parent_style = row_flex_parent("stretch");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("align-self", "baseline");
    let child = ElementBox::new(Rect::new(0.0, 12.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 0.0, 50.0, 100.0));
}

#[test]
fn test_unknown_align_self_takes_stretch_from_parent() {
    let parent_style = row_flex_parent("stretch").with("padding", "10px");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 120.0), &parent_style);
    let child_style = StyleSnapshot::default()
        .with("align-self", "safe center")
        .with("margin", "4px 0px");
    let child = ElementBox::new(Rect::new(10.0, 30.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    // Parent content box is y=10..110, minus the item's vertical margins.
    assert_eq!(bands.content, Rect::new(10.0, 14.0, 50.0, 92.0));
}

#[test]
fn test_explicit_placement_wins_over_stretching_parent() {
    let parent_style = row_flex_parent("stretch");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("align-self", "start");
    let child = ElementBox::new(Rect::new(0.0, 30.0, 50.0, 20.0), &child_style);

    let bands = BoxModelCalculator::compute(child, Some(parent));

    assert_eq!(bands.content, Rect::new(0.0, 0.0, 50.0, 20.0));
}

#[test]
fn test_auto_through_unmatched_parent_keeps_reported_position() {
    let parent_style = row_flex_parent("first baseline");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("align-self", "auto");
    let rect = Rect::new(0.0, 12.0, 50.0, 20.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &child_style), Some(parent));

    assert_eq!(bands.content, rect);
}

#[test]
fn test_baseline_item_in_non_stretching_parent_keeps_position() {
    let parent_style = row_flex_parent("center");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default().with("align-self", "baseline");
    let rect = Rect::new(0.0, 12.0, 50.0, 20.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &child_style), Some(parent));

    assert_eq!(bands.content, rect);
}

#[test]
fn test_column_parent_leaves_content_box() {
    let parent_style = row_flex_parent("stretch").with("flex-direction", "column");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default();
    let rect = Rect::new(0.0, 0.0, 50.0, 20.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &child_style), Some(parent));

    assert_eq!(bands.content, rect);
}

#[test]
fn test_block_parent_leaves_content_box() {
    let parent_style = StyleSnapshot::default().with("align-items", "stretch");
    let parent = ElementBox::new(Rect::new(0.0, 0.0, 300.0, 100.0), &parent_style);
    let child_style = StyleSnapshot::default();
    let rect = Rect::new(0.0, 0.0, 50.0, 20.0);

    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &child_style), Some(parent));

    assert_eq!(bands.content, rect);
}
