//! Finding a font for tooltip text.

use fontdue::{Font, FontSettings};

/// Common system font paths to search for a regular sans-serif font.
pub const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Load the first font in `paths` that exists and parses.
#[must_use]
pub fn load_font_from_paths(paths: &[&str]) -> Option<Font> {
    for path in paths {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            log::debug!("loaded tooltip font: {path}");
            return Some(font);
        }
    }
    None
}

/// Load a regular system font, or `None` if none of
/// [`FONT_SEARCH_PATHS`] is usable. Text is then not drawn.
#[must_use]
pub fn load_system_font() -> Option<Font> {
    let font = load_font_from_paths(FONT_SEARCH_PATHS);
    if font.is_none() {
        log::warn!(
            "no system font found, tooltip text will not be drawn (searched {})",
            FONT_SEARCH_PATHS.join(", ")
        );
    }
    font
}
