//! boxlens CLI - render the inspector overlay for a scene file.
//!
//! Usage:
//!   boxlens <scene.json>                         Summarize the scene and overlay
//!   boxlens <scene.json> --hover 40,20           Hover the element at (40, 20)
//!   boxlens <scene.json> --click 40,20 -o out.png  Select it and write a PNG
//!   boxlens <scene.json> --json                  Print the display list as JSON
//!
//! Events listed in the scene's `events` array run first, then `--click`
//! points in order, then `--hover`.

mod events;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boxlens_css::Point;
use boxlens_dom::SceneTree;
use boxlens_overlay::{DisplayList, Inspector, OverlayConfig};
use boxlens_raster::PixmapSurface;
use clap::Parser;
use owo_colors::OwoColorize;

use events::{EventScript, InputEvent};

/// Render the boxlens box-model and gap overlay for a scene.
#[derive(Parser, Debug)]
#[command(name = "boxlens")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Hover a flex container and write the overlay
    boxlens demos/flex-row.json --hover 140,60 -o overlay.png

    # Select two elements, then hover a third
    boxlens demos/flex-row.json --click 40,60 --click 160,60 --hover 300,60

    # Use a custom palette and dump the drawing commands
    boxlens demos/flex-row.json --config palette.json --hover 140,60 --json
"#)]
struct Cli {
    /// Scene file (JSON)
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Overlay config file (JSON); unspecified fields keep their defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the overlay to this PNG file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the display list as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Move the pointer here after all other events
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    hover: Option<Point>,

    /// Click here, toggling the element under the point (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    click: Vec<Point>,

    /// Log debug output (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = std::fs::read_to_string(&cli.scene)
        .with_context(|| format!("failed to read scene '{}'", cli.scene.display()))?;
    let mut tree = SceneTree::from_json_str(&text)
        .with_context(|| format!("failed to load scene '{}'", cli.scene.display()))?;
    let script: EventScript = serde_json::from_str(&text)
        .with_context(|| format!("invalid events in '{}'", cli.scene.display()))?;

    let config = match &cli.config {
        Some(path) => OverlayConfig::from_json_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => OverlayConfig::default(),
    };

    let viewport = tree.viewport();
    let mut surface = PixmapSurface::new(viewport.width, viewport.height, viewport.device_pixel_ratio)
        .context("failed to create drawing surface")?;
    let mut inspector = Inspector::new(config, viewport);

    let cli_events = cli
        .click
        .iter()
        .map(|&point| InputEvent::click_at(point))
        .chain(cli.hover.map(InputEvent::move_to));
    for event in script.events.into_iter().chain(cli_events) {
        events::apply(event, &mut inspector, &mut tree, &mut surface);
    }

    let display_list = inspector.redraw(&tree, &mut surface);

    if let Some(path) = &cli.output {
        surface
            .save_png(path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&display_list)
            .context("failed to serialize display list")?;
        println!("{json}");
    } else {
        print_summary(&tree, &inspector, &display_list, &surface, cli.output.as_deref());
    }

    Ok(())
}

/// `RUST_LOG` decides unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        let _ = builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Parse `X,Y` into a point.
fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{value}'"))?;
    let coordinate = |text: &str| {
        text.trim()
            .parse::<f32>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or_else(|| format!("'{}' is not a number", text.trim()))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

fn print_summary(
    tree: &SceneTree,
    inspector: &Inspector,
    display_list: &DisplayList,
    surface: &PixmapSurface,
    output: Option<&Path>,
) {
    let viewport = tree.viewport();
    println!(
        "{} {}x{} @{}x, {} nodes",
        "Scene:".bold(),
        viewport.width,
        viewport.height,
        viewport.device_pixel_ratio,
        tree.len()
    );

    match inspector.hovered() {
        Some(hovered) => {
            let classes = hovered.class_text();
            let label = if classes.is_empty() {
                format!("<{}>", hovered.tag_name)
            } else {
                format!("<{} class=\"{classes}\">", hovered.tag_name)
            };
            println!(
                "{} {} at ({}, {})",
                "Hovered:".bold(),
                label.cyan(),
                hovered.cursor.x,
                hovered.cursor.y
            );
        }
        None => println!("{} {}", "Hovered:".bold(), "nothing".dimmed()),
    }

    let selection = inspector.selection();
    println!("{} {}", "Selected:".bold(), selection.len().green());
    for node in selection.iter() {
        if let Some(data) = tree.element(node) {
            let rect = data.rect;
            println!(
                "  {} {} {}x{} at ({}, {})",
                format!("{node:?}").dimmed(),
                data.tag_name,
                rect.width,
                rect.height,
                rect.x,
                rect.y
            );
        }
    }

    println!("{} {}", "Commands:".bold(), display_list.len().yellow());
    if let Some(path) = output {
        println!(
            "{} {} ({}x{} device pixels)",
            "Wrote:".bold(),
            path.display().green(),
            surface.width(),
            surface.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("40,20"), Ok(Point::new(40.0, 20.0)));
        assert_eq!(parse_point(" 1.5 , -3 "), Ok(Point::new(1.5, -3.0)));
        assert!(parse_point("40").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("inf,1").is_err());
    }

    #[test]
    fn test_cli_accepts_repeated_clicks() {
        let cli = Cli::try_parse_from([
            "boxlens", "scene.json", "--click", "1,2", "--click", "3,4", "--hover", "5,6",
        ])
        .expect("valid arguments");
        assert_eq!(cli.click, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(cli.hover, Some(Point::new(5.0, 6.0)));
    }
}
