//! Note-tag parsing for map parallax directives.

use std::sync::LazyLock;

use regex::Regex;

use crate::MapParallaxConfig;

static IMAGES_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ParallaxImages:\s*([^>]+)>").unwrap());
static DELAY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<ParallaxDelay:\s*(\d+)>").unwrap());

/// Build a [`MapParallaxConfig`] from a map's free-text note field.
///
/// Two independent directives are recognized, case-insensitively and in
/// any order. When a directive appears more than once, the first match
/// wins.
///
/// ```text
/// <ParallaxImages: name1, name2, name3>
/// <ParallaxDelay: 60>
/// ```
///
/// This is a total function: a missing or malformed directive never
/// produces an error, only a default. No `ParallaxImages` tag (or one
/// whose entries are all blank) yields an empty image list; a
/// `ParallaxDelay` value that is absent, non-numeric, or below 1 falls
/// back to `default_delay`.
///
/// ## Example
///
/// ```rust
/// use parallax_cycle_core::build_config;
///
/// let note = "<ParallaxImages: forest1, forest2, forest3>\n<ParallaxDelay: 45>";
/// let config = build_config(note, 60);
/// assert_eq!(config.images, vec!["forest1", "forest2", "forest3"]);
/// assert_eq!(config.delay_frames, 45);
/// ```
pub fn build_config(note_text: &str, default_delay: u32) -> MapParallaxConfig {
    MapParallaxConfig::new(
        parse_images(note_text),
        parse_delay(note_text, default_delay),
    )
}

/// Extract the ordered image list from the images directive.
///
/// Entries are trimmed; blank entries are dropped rather than kept as
/// empty identifiers.
fn parse_images(note_text: &str) -> Vec<String> {
    let Some(caps) = IMAGES_TAG.captures(note_text) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the delay directive, falling back to `default_delay` when the
/// tag is missing or its value does not parse to an integer >= 1.
fn parse_delay(note_text: &str, default_delay: u32) -> u32 {
    DELAY_TAG
        .captures(note_text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|&delay| delay >= 1)
        .unwrap_or(default_delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_note_yields_defaults() {
        let config = build_config("", 60);
        assert!(config.images.is_empty());
        assert_eq!(config.delay_frames, 60);
    }

    #[test]
    fn images_are_trimmed_and_ordered() {
        let config = build_config("<ParallaxImages: forest1, forest2 , forest3>", 60);
        assert_eq!(config.images, vec!["forest1", "forest2", "forest3"]);
    }

    #[test]
    fn blank_entries_are_dropped() {
        let config = build_config("<ParallaxImages: a, , b,>", 60);
        assert_eq!(config.images, vec!["a", "b"]);
    }

    #[test]
    fn all_blank_entries_yield_empty_list() {
        let config = build_config("<ParallaxImages:  , ,  >", 60);
        assert!(config.images.is_empty());
    }

    #[test]
    fn delay_directive_is_used() {
        let config = build_config("<ParallaxDelay: 45>", 60);
        assert_eq!(config.delay_frames, 45);
    }

    #[test]
    fn non_numeric_delay_falls_back() {
        let config = build_config("<ParallaxDelay: abc>", 60);
        assert_eq!(config.delay_frames, 60);
    }

    #[test]
    fn zero_delay_falls_back() {
        let config = build_config("<ParallaxDelay: 0>", 60);
        assert_eq!(config.delay_frames, 60);
    }

    #[test]
    fn overflowing_delay_falls_back() {
        let config = build_config("<ParallaxDelay: 99999999999999999999>", 60);
        assert_eq!(config.delay_frames, 60);
    }

    #[test]
    fn tags_are_case_insensitive() {
        let config = build_config("<parallaximages: a, b>\n<PARALLAXDELAY: 30>", 60);
        assert_eq!(config.images, vec!["a", "b"]);
        assert_eq!(config.delay_frames, 30);
    }

    #[test]
    fn directive_order_does_not_matter() {
        let config = build_config("<ParallaxDelay: 12>\n<ParallaxImages: x, y>", 60);
        assert_eq!(config.images, vec!["x", "y"]);
        assert_eq!(config.delay_frames, 12);
    }

    #[test]
    fn first_duplicate_directive_wins() {
        let note = "<ParallaxImages: a, b>\n<ParallaxImages: c>\n\
                    <ParallaxDelay: 10>\n<ParallaxDelay: 99>";
        let config = build_config(note, 60);
        assert_eq!(config.images, vec!["a", "b"]);
        assert_eq!(config.delay_frames, 10);
    }

    #[test]
    fn directives_embedded_in_surrounding_prose() {
        let note = "Author notes for this map.\n\
                    <ParallaxImages: clouds1, clouds2>\n\
                    Remember to fix the tileset.";
        let config = build_config(note, 60);
        assert_eq!(config.images, vec!["clouds1", "clouds2"]);
    }
}
