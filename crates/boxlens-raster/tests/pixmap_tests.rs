//! Tests for the pixmap drawing surface.

use boxlens_css::{Point, Rect};
use boxlens_dom::{ElementData, NodeId, SceneTree, Viewport};
use boxlens_overlay::{
    ColorValue, DrawingSurface, HostContext, HoveredElement, OverlayConfig, OverlayRenderer,
    Paint, SelectionState,
};
use boxlens_raster::PixmapSurface;

const RED: Paint = Paint::new(ColorValue::rgb(255, 0, 0), 1.0);

fn surface(width: f32, height: f32, dpr: f32) -> PixmapSurface {
    PixmapSurface::new(width, height, dpr)
        .expect("small surface allocates")
        .with_font(None)
}

#[test]
fn test_backing_store_is_device_sized() {
    let surface = surface(100.0, 50.5, 2.0);
    assert_eq!((surface.width(), surface.height()), (200, 101));
    assert_eq!(surface.device_pixel_ratio(), 2.0);
}

#[test]
fn test_fill_rect_is_scaled_to_device_pixels() {
    let mut surface = surface(40.0, 40.0, 2.0);
    surface.fill_rect(Rect::new(10.0, 10.0, 10.0, 10.0), RED);

    assert_eq!(surface.pixel(25, 25), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(39, 39), Some([255, 0, 0, 255]));
    assert_eq!(surface.pixel(15, 15).map(|p| p[3]), Some(0));
    assert_eq!(surface.pixel(45, 45).map(|p| p[3]), Some(0));
}

#[test]
fn test_opacity_is_applied() {
    let mut surface = surface(10.0, 10.0, 1.0);
    surface.fill_rect(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Paint::new(ColorValue::rgb(0, 0, 255), 0.5),
    );

    let alpha = surface.pixel(5, 5).map(|p| p[3]).expect("in bounds");
    assert!((120..=135).contains(&alpha), "alpha {alpha}");
}

#[test]
fn test_clear_erases_everything() {
    let mut surface = surface(10.0, 10.0, 1.0);
    surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), RED);
    surface.clear();
    assert_eq!(surface.pixel(5, 5), Some([0, 0, 0, 0]));
}

#[test]
fn test_resize_reallocates() {
    let mut surface = surface(10.0, 10.0, 1.0);
    surface.resize(30.0, 20.0, 1.5);
    assert_eq!((surface.width(), surface.height()), (45, 30));
    assert_eq!(surface.device_pixel_ratio(), 1.5);
}

#[test]
fn test_dashed_line_leaves_gaps() {
    let mut surface = surface(20.0, 10.0, 1.0);
    surface.set_line_dash(&[4.0, 4.0]);
    surface.stroke_line(Point::new(0.0, 5.5), Point::new(20.0, 5.5), RED, 1.0);

    let alpha_at = |x| surface.pixel(x, 5).map_or(0, |p| p[3]);
    assert!(alpha_at(1) > 0);
    assert_eq!(alpha_at(5), 0);
    assert!(alpha_at(9) > 0);

    surface.clear();
    surface.set_line_dash(&[]);
    surface.stroke_line(Point::new(0.0, 5.5), Point::new(20.0, 5.5), RED, 1.0);
    assert!(surface.pixel(5, 5).map_or(0, |p| p[3]) > 0);
}

#[test]
fn test_text_without_font_draws_nothing() {
    let mut surface = surface(50.0, 20.0, 1.0);
    surface.fill_text(Point::new(2.0, 14.0), "div", 12.0, RED);
    assert!((0..50).all(|x| (0..20).all(|y| surface.pixel(x, y) == Some([0, 0, 0, 0]))));
}

#[test]
fn test_rendered_overlay_replays_and_saves() {
    let mut tree = SceneTree::new(
        Viewport::new(60.0, 40.0, 1.0),
        ElementData::new("body", Rect::new(0.0, 0.0, 60.0, 40.0)),
    );
    let div = tree.alloc(ElementData::new("div", Rect::new(10.0, 10.0, 20.0, 10.0)));
    tree.append_child(NodeId::ROOT, div);

    let config = OverlayConfig::default();
    let state = SelectionState {
        hovered: Some(HoveredElement {
            node: div,
            tag_name: "div".to_string(),
            classes: Vec::new(),
            cursor: Point::new(40.0, 30.0),
        }),
        ..SelectionState::default()
    };
    let list = OverlayRenderer::new(&config).paint(
        &tree,
        &state,
        &HostContext::new(Viewport::new(60.0, 40.0, 1.0)),
    );

    let mut surface = surface(60.0, 40.0, 1.0);
    list.replay(&mut surface);

    // Content band of the hovered div is light blue.
    let [r, g, b, a] = surface.pixel(15, 15).expect("in bounds");
    assert!(a > 0);
    assert!(b > r && g > r);

    let path = std::env::temp_dir().join(format!("boxlens-raster-{}.png", std::process::id()));
    surface.save_png(&path).expect("png written");
    let decoded = image::open(&path).expect("png readable").to_rgba8();
    let _ = std::fs::remove_file(&path);

    assert_eq!(decoded.dimensions(), (60, 40));
    assert_eq!(decoded.get_pixel(15, 15).0, [r, g, b, a]);
}
