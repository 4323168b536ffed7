//! Built-in themes seeded into an empty catalog.

use super::color::RgbaColor;

/// A built-in theme before it is given an id.
#[derive(Clone, Copy, Debug)]
pub struct DefaultTheme {
    pub name: &'static str,
    pub color: RgbaColor,
    pub emojis: &'static str,
}

/// Seeded in this order. Each deals every one of its symbols.
pub const DEFAULT_THEMES: &[DefaultTheme] = &[
    DefaultTheme {
        name: "Vehicles",
        color: RgbaColor::GREEN,
        emojis: "🚙🚗🚘🚕🚖🏎🚚🛻🚛🚐🚓🚔🚑🚒🚀✈️🛫🛬🛩🚁🛸🚲🏍🛶⛵️🚤🛥🛳⛴🚢🚂🚝🚅🚆🚊🚉🚇🛺🚜",
    },
    DefaultTheme {
        name: "Sports",
        color: RgbaColor::RED,
        emojis: "🏈⚾️🏀⚽️🎾🏐🥏🏓⛳️🥅🥌🏂⛷🎳",
    },
    DefaultTheme {
        name: "Music",
        color: RgbaColor::BLUE,
        emojis: "🎼🎤🎹🪘🥁🎺🪗🪕🎻",
    },
    DefaultTheme {
        name: "Animals",
        color: RgbaColor::YELLOW,
        emojis: "🐥🐣🐂🐄🐎🐖🐏🐑🦙🐐🐓🐁🐀🐒🦆🦅🦉🦇🐢🐍🦎🦖🦕🐅🐆🦓🦍🦧🦣🐘🦛🦏🐪🐫🦒🦘🦬🐃🦌🐕🐩🦮🐈🦤🦢🦩🕊🐇🦨🦡🦫🦦🦥🐿🦔",
    },
    DefaultTheme {
        name: "Animal Faces",
        color: RgbaColor::ORANGE,
        emojis: "🐵🙈🙊🙉🐶🐱🐭🐹🐰🦊🐻🐼🐻‍❄️🐨🐯🦁🐮🐷🐸🐲",
    },
    DefaultTheme {
        name: "Flora",
        color: RgbaColor::PURPLE,
        emojis: "🌲🌴🌿☘️🍀🍁🍄🌾💐🌷🌹🥀🌺🌸🌼🌻",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_segmentation::UnicodeSegmentation;

    use crate::themes::theme::{dedup_symbols, MIN_PAIRS};

    #[test]
    fn test_defaults_are_playable() {
        for theme in DEFAULT_THEMES {
            assert_eq!(dedup_symbols(theme.emojis), theme.emojis, "{} has repeats", theme.name);
            assert!(theme.emojis.graphemes(true).count() >= MIN_PAIRS, "{} too small", theme.name);
        }
    }

    #[test]
    fn test_presentation_sequences_kept_whole() {
        let faces = DEFAULT_THEMES.iter().find(|t| t.name == "Animal Faces").unwrap();
        assert!(faces.emojis.graphemes(true).any(|symbol| symbol == "🐻‍❄️"));

        let sports = DEFAULT_THEMES.iter().find(|t| t.name == "Sports").unwrap();
        assert_eq!(sports.emojis.graphemes(true).count(), 14);
    }

    #[test]
    fn test_default_names_unique() {
        let mut names: Vec<_> = DEFAULT_THEMES.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_THEMES.len());
    }
}
