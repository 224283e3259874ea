//! Property tests for the geometry invariants.

use boxlens_css::{
    BoxModelCalculator, ChildGeometry, ElementBox, GapDetector, GapKind, Rect, StyleSnapshot,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn boxed_style(margin: u8, border: u8, padding: u8) -> StyleSnapshot {
    StyleSnapshot::default()
        .with("margin", &format!("{margin}px"))
        .with("border-width", &format!("{border}px"))
        .with("padding", &format!("{padding}px"))
}

/// Each band's four strips cover exactly the area between its two boxes.
#[quickcheck]
fn prop_bands_tile_between_boxes(
    x: i16,
    y: i16,
    width: u8,
    height: u8,
    margin: u8,
    border: u8,
    padding: u8,
) -> bool {
    let style = boxed_style(margin, border, padding);
    let rect = Rect::new(f32::from(x), f32::from(y), f32::from(width), f32::from(height));
    let bands = BoxModelCalculator::compute(ElementBox::new(rect, &style), None);
    let dims = bands.dimensions;

    let close = |a: f32, b: f32| (a - b).abs() <= 0.5;
    close(
        bands.margin.area(),
        dims.margin_box().area() - dims.border_box().area(),
    ) && close(
        bands.border.area(),
        dims.border_box().area() - dims.padding_box().area(),
    ) && close(
        bands.padding.area(),
        dims.padding_box().area() - dims.content_box().area(),
    )
}

/// Identical input always yields identical bands.
#[quickcheck]
fn prop_box_model_is_idempotent(
    top: i16,
    height: u8,
    margin: u8,
    align: u8,
    parent_height: u8,
) -> bool {
    let keywords = ["stretch", "center", "flex-start", "flex-end", "normal"];
    let parent_style = StyleSnapshot::default()
        .with("display", "flex")
        .with("align-items", keywords[usize::from(align) % keywords.len()]);
    let parent = ElementBox::new(
        Rect::new(0.0, 0.0, 500.0, f32::from(parent_height)),
        &parent_style,
    );
    let style = boxed_style(margin, 1, 2);
    let element = ElementBox::new(
        Rect::new(10.0, f32::from(top), 40.0, f32::from(height)),
        &style,
    );

    BoxModelCalculator::compute(element, Some(parent))
        == BoxModelCalculator::compute(element, Some(parent))
}

/// N evenly spaced items give N - 1 item gaps, plus a trailing gap only when
/// the row is not filled.
#[quickcheck]
fn prop_uniform_flex_row(count: u8, width: u8, gap: u8, slack: u8) -> TestResult {
    let count = usize::from(count % 11) + 2;
    let width = f32::from(width % 50) + 1.0;
    let gap = f32::from(gap % 20) + 1.0;
    let slack = f32::from(slack % 30);

    let children: Vec<ChildGeometry> = (0..count)
        .map(|i| ChildGeometry::new(Rect::new(i as f32 * (width + gap), 0.0, width, 30.0), 0))
        .collect();
    let used = count as f32 * width + (count - 1) as f32 * gap;
    let parent = Rect::new(0.0, 0.0, used + slack, 30.0);
    let style = StyleSnapshot::default().with("display", "flex");

    let bands = GapDetector::default().detect(&children, parent, &style);

    let items: Vec<_> = bands
        .iter()
        .filter(|band| band.kind == GapKind::FlexItem)
        .collect();
    let trailing = bands
        .iter()
        .filter(|band| band.kind == GapKind::FlexTrailing)
        .count();

    TestResult::from_bool(
        items.len() == count - 1
            && items.iter().all(|band| band.rect.width == gap)
            && trailing == usize::from(slack >= 1.0),
    )
}

/// M column tracks with a uniform gutter give M - 1 column bands.
#[quickcheck]
fn prop_uniform_grid_columns(tracks: u8, size: u8, gap: u8) -> bool {
    let tracks = usize::from(tracks % 9) + 2;
    let size = u32::from(size % 100) + 1;
    let gap = u32::from(gap % 20) + 1;

    let columns = vec![format!("{size}px"); tracks].join(" ");
    let style = StyleSnapshot::default()
        .with("display", "grid")
        .with("grid-template-columns", &columns)
        .with("column-gap", &format!("{gap}px"));
    let total = tracks as u32 * size + (tracks as u32 - 1) * gap;
    let parent = Rect::new(0.0, 0.0, total as f32, 50.0);
    let children = vec![ChildGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0), 0); 2];

    let bands = GapDetector::default().detect(&children, parent, &style);

    bands.len() == tracks - 1
        && bands
            .iter()
            .all(|band| band.kind == GapKind::GridColumn && band.rect.width == gap as f32)
}
