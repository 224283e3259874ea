//! Resolved grid track lists.
//!
//! [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-1/#track-sizing)
//!
//! "When an element generates a grid container box, the resolved value of its
//! grid-template-rows or grid-template-columns property is the used value,
//! serialized with each track listed individually, regardless of whether the
//! track was implicitly or explicitly created."
//!
//! So by the time the inspector sees a track list, `repeat()`, `fr`, and
//! `minmax()` have all been flattened into pixel sizes. Line names survive
//! in brackets and are skipped.

use boxlens_common::warning::warn_once;

use super::values::parse_leading_number;

/// A list of resolved track sizes in pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackList {
    /// Track sizes in order, all non-negative.
    pub sizes: Vec<f32>,
}

impl TrackList {
    /// Parse a resolved `grid-template-columns` / `grid-template-rows` value.
    ///
    /// `none` and the empty string are zero tracks. Any token that is neither
    /// a line name nor a number makes the whole list malformed, which also
    /// degrades to zero tracks.
    #[must_use]
    pub fn parse(property: &str, value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Self::default();
        }

        let mut sizes = Vec::new();
        let mut in_line_names = false;
        for token in trimmed.split_whitespace() {
            // [§ 7.2.1 Named Grid Lines](https://www.w3.org/TR/css-grid-1/#named-lines)
            // "[a b]" may be split across several whitespace tokens.
            if in_line_names || token.starts_with('[') {
                in_line_names = !token.ends_with(']');
                continue;
            }
            if let Some(size) = parse_leading_number(token) {
                sizes.push(size.max(0.0));
            } else {
                let _ = warn_once(
                    "style",
                    &format!("malformed track list '{trimmed}' for {property}, ignoring tracks"),
                );
                return Self::default();
            }
        }
        Self { sizes }
    }

    /// Number of tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the list has no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_track_list() {
        let tracks = TrackList::parse("grid-template-columns", "100px 200.5px 50px");
        assert_eq!(tracks.sizes, vec![100.0, 200.5, 50.0]);
    }

    #[test]
    fn test_line_names_are_skipped() {
        let tracks = TrackList::parse("grid-template-columns", "[full-start] 10px [main-start side] 20px [end]");
        assert_eq!(tracks.sizes, vec![10.0, 20.0]);
    }

    #[test]
    fn test_none_and_empty_are_zero_tracks() {
        assert!(TrackList::parse("grid-template-rows", "none").is_empty());
        assert!(TrackList::parse("grid-template-rows", "   ").is_empty());
    }

    #[test]
    fn test_malformed_list_is_zero_tracks() {
        assert!(TrackList::parse("grid-template-rows", "100px subgrid").is_empty());
        assert!(TrackList::parse("grid-template-rows", "repeat(2, 1fr)").is_empty());
    }
}
