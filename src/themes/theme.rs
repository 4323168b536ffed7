//! Theme records.
//!
//! A `Theme` is the configuration a game is dealt from: a name, a color,
//! a string of candidate symbols and how many pairs to deal.
//!
//! A symbol is one extended grapheme cluster, so skin-tone and ZWJ
//! sequences such as `👍🏽` or `🐻‍❄️` count as a single symbol. Editing the
//! symbol string always deduplicates it, keeping the first occurrence of
//! each symbol.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::color::RgbaColor;

/// Smallest playable pair count for an edited theme.
pub const MIN_PAIRS: usize = 2;

/// Identifier for a theme, unique within one catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(pub u32);

impl ThemeId {
    /// Create a new theme ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theme({})", self.0)
    }
}

/// A named game configuration.
///
/// Field names match the persisted record layout
/// (`name`, `color`, `emojis`, `numPairs`, `id`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub color: RgbaColor,
    pub emojis: String,
    pub num_pairs: usize,
    pub id: ThemeId,
}

impl Theme {
    /// Build a theme, deduplicating `emojis` and clamping `num_pairs`
    /// to the number of distinct symbols.
    pub(crate) fn new(
        id: ThemeId,
        name: impl Into<String>,
        color: RgbaColor,
        emojis: &str,
        num_pairs: Option<usize>,
    ) -> Self {
        let emojis = dedup_symbols(emojis);
        let available = symbol_count(&emojis);
        Self {
            name: name.into(),
            color,
            num_pairs: num_pairs.map_or(available, |n| n.min(available)),
            emojis,
            id,
        }
    }

    /// Distinct symbols in edit order.
    #[must_use]
    pub fn symbols(&self) -> Vec<String> {
        dedup_symbols(&self.emojis).graphemes(true).map(str::to_owned).collect()
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        symbol_count(&dedup_symbols(&self.emojis))
    }

    /// Cards dealt for this theme.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.num_pairs * 2
    }

    /// Replace the symbol string. Shrinking it below `num_pairs` pulls
    /// `num_pairs` down with it.
    pub(crate) fn set_emojis(&mut self, emojis: &str) {
        self.emojis = dedup_symbols(emojis);
        self.clamp_pairs();
    }

    /// Set the pair count, clamped to `[MIN_PAIRS, symbol_count]`.
    ///
    /// Themes with fewer than `MIN_PAIRS` symbols clamp to what they have.
    pub(crate) fn set_num_pairs(&mut self, num_pairs: usize) -> usize {
        let available = self.symbol_count();
        self.num_pairs = num_pairs.max(MIN_PAIRS).min(available);
        self.num_pairs
    }

    /// Re-establish the record invariants after an arbitrary edit.
    pub(crate) fn normalize(&mut self) {
        self.emojis = dedup_symbols(&self.emojis);
        self.color = RgbaColor::new(self.color.red, self.color.green, self.color.blue, self.color.alpha);
        self.clamp_pairs();
    }

    fn clamp_pairs(&mut self) {
        let available = symbol_count(&self.emojis);
        if self.num_pairs > available {
            self.num_pairs = available;
        }
    }
}

/// Remove repeated symbols, keeping the first occurrence of each.
#[must_use]
pub fn dedup_symbols(symbols: &str) -> String {
    let mut seen = FxHashSet::default();
    symbols.graphemes(true).filter(|symbol| seen.insert(*symbol)).collect()
}

fn symbol_count(symbols: &str) -> usize {
    symbols.graphemes(true).count()
}
