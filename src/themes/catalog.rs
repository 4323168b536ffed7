//! The theme catalog: an ordered, persisted list of themes.
//!
//! Every mutation re-serializes the whole list and writes it to the
//! catalog's storage slot (`"ThemeStore:" + name`) before returning.
//! Opening a catalog restores that slot; a missing, unreadable or empty
//! slot seeds the built-in themes instead. So does a stored list that
//! repeats an id.
//!
//! ## Example
//!
//! ```
//! use memorize::themes::{MemoryStorage, RgbaColor, ThemeCatalog};
//!
//! let mut catalog = ThemeCatalog::open("Default", MemoryStorage::new());
//! let before = catalog.len();
//!
//! let id = catalog.add_theme("Letters", RgbaColor::BLUE, "abcdef", Some(4), 0);
//! assert_eq!(catalog.theme_at(0).id, id);
//! assert_eq!(catalog.theme_at(0).num_pairs, 4);
//!
//! catalog.remove_theme(0);
//! assert_eq!(catalog.len(), before);
//! ```

use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::color::RgbaColor;
use super::defaults::DEFAULT_THEMES;
use super::storage::{StorageError, ThemeStorage};
use super::theme::{Theme, ThemeId, MIN_PAIRS};

/// Edits the catalog refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no theme at index {index} (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("a theme needs at least {} symbols", MIN_PAIRS)]
    TooFewSymbols,
}

/// Ordered collection of themes bound to a storage slot.
#[derive(Debug)]
pub struct ThemeCatalog<S: ThemeStorage> {
    name: String,
    themes: Vec<Theme>,
    storage: S,
}

impl<S: ThemeStorage> ThemeCatalog<S> {
    /// Storage key for a catalog name.
    #[must_use]
    pub fn storage_key(name: &str) -> String {
        format!("ThemeStore:{name}")
    }

    /// Open the catalog `name`, restoring it from `storage`.
    ///
    /// Falls back to the built-in themes (and persists them) when nothing
    /// usable is stored.
    pub fn open(name: impl Into<String>, storage: S) -> Self {
        let mut catalog = Self {
            name: name.into(),
            themes: Vec::new(),
            storage,
        };

        catalog.themes = catalog.restore().unwrap_or_default();
        if catalog.themes.is_empty() {
            catalog.seed_defaults();
        } else {
            info!(catalog = %catalog.name, themes = catalog.themes.len(), "restored theme catalog");
        }
        catalog
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Themes in display order.
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Number of themes. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the catalog holds no themes. `false` once opened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme at `index`, with the index clamped into range.
    #[must_use]
    pub fn theme_at(&self, index: usize) -> &Theme {
        let safe_index = index.min(self.themes.len().saturating_sub(1));
        &self.themes[safe_index]
    }

    /// Theme with the given id.
    #[must_use]
    pub fn theme(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Position of the theme with the given id.
    #[must_use]
    pub fn position_of(&self, id: ThemeId) -> Option<usize> {
        self.themes.iter().position(|theme| theme.id == id)
    }

    /// Give back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Insert a new theme at `index` (clamped to `[0, len]`).
    ///
    /// The id is one more than the largest id in the catalog, or the
    /// lowest unused id once the largest is `u32::MAX`. `num_pairs` is
    /// clamped to the number of distinct symbols; `None` means all.
    pub fn add_theme(
        &mut self,
        name: impl Into<String>,
        color: RgbaColor,
        emojis: &str,
        num_pairs: Option<usize>,
        index: usize,
    ) -> ThemeId {
        let id = self.next_id();
        let theme = Theme::new(id, name, color, emojis, num_pairs);
        let safe_index = index.min(self.themes.len());
        debug!(%id, name = %theme.name, index = safe_index, "adding theme");
        self.themes.insert(safe_index, theme);
        self.persist();
        id
    }

    /// Remove the theme at `index`.
    ///
    /// Refused when only one theme is left or the index is out of range.
    /// Returns `index` wrapped into the resulting length, for selecting a
    /// neighbour.
    pub fn remove_theme(&mut self, index: usize) -> usize {
        if self.themes.len() > 1 && index < self.themes.len() {
            let removed = self.themes.remove(index);
            debug!(id = %removed.id, name = %removed.name, "removed theme");
            self.persist();
        }
        index % self.themes.len()
    }

    /// Move the theme at `from` so it ends up at `to` (clamped).
    pub fn move_theme(&mut self, from: usize, to: usize) -> Result<(), CatalogError> {
        self.check_index(from)?;
        let theme = self.themes.remove(from);
        let safe_index = to.min(self.themes.len());
        self.themes.insert(safe_index, theme);
        self.persist();
        Ok(())
    }

    /// Rename the theme at `index`.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        self.edit(index, |theme| theme.name = name)
    }

    /// Recolor the theme at `index`.
    pub fn set_color(&mut self, index: usize, color: RgbaColor) -> Result<(), CatalogError> {
        self.edit(index, |theme| theme.color = color)
    }

    /// Replace the symbols of the theme at `index`.
    ///
    /// Symbols are deduplicated; `num_pairs` shrinks if the new set is
    /// smaller than it.
    pub fn set_emojis(&mut self, index: usize, emojis: &str) -> Result<(), CatalogError> {
        self.edit(index, |theme| theme.set_emojis(emojis))
    }

    /// Prepend emoji to the theme at `index`, skipping any symbol already
    /// present.
    ///
    /// Input is split into grapheme clusters and only emoji are kept. A
    /// cluster counts as an emoji when it holds a pictographic code point
    /// or an emoji presentation selector (U+FE0F) or a keycap (U+20E3).
    /// Letters, digits, punctuation and whitespace are dropped.
    pub fn add_emojis(&mut self, index: usize, emojis: &str) -> Result<(), CatalogError> {
        let incoming: String = emojis.graphemes(true).filter(|g| is_emoji(g)).collect();
        self.edit(index, |theme| {
            let combined = incoming + &theme.emojis;
            theme.set_emojis(&combined);
        })
    }

    /// Drop one symbol from the theme at `index`.
    ///
    /// Refused with `TooFewSymbols` when it would leave fewer than
    /// `MIN_PAIRS` symbols.
    pub fn remove_emoji(&mut self, index: usize, symbol: &str) -> Result<(), CatalogError> {
        self.check_index(index)?;
        let theme = &self.themes[index];
        if !theme.emojis.graphemes(true).any(|g| g == symbol) {
            return Ok(());
        }
        if theme.symbol_count() <= MIN_PAIRS {
            return Err(CatalogError::TooFewSymbols);
        }
        self.edit(index, |theme| {
            let remaining: String = theme.emojis.graphemes(true).filter(|g| *g != symbol).collect();
            theme.set_emojis(&remaining);
        })
    }

    /// Set the pair count of the theme at `index`, clamped to
    /// `[MIN_PAIRS, symbol_count]`. Returns the stored value.
    pub fn set_num_pairs(&mut self, index: usize, num_pairs: usize) -> Result<usize, CatalogError> {
        let mut stored = 0;
        self.edit(index, |theme| stored = theme.set_num_pairs(num_pairs))?;
        Ok(stored)
    }

    /// Apply an arbitrary edit to the theme at `index`.
    ///
    /// The theme keeps its id, its symbols are deduplicated and its pair
    /// count is clamped afterwards. Persists once.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut Theme)) -> Result<(), CatalogError> {
        self.edit(index, |theme| {
            let id = theme.id;
            f(theme);
            theme.id = id;
            theme.normalize();
        })
    }

    fn edit(&mut self, index: usize, f: impl FnOnce(&mut Theme)) -> Result<(), CatalogError> {
        self.check_index(index)?;
        f(&mut self.themes[index]);
        debug!(id = %self.themes[index].id, "edited theme");
        self.persist();
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), CatalogError> {
        if index < self.themes.len() {
            Ok(())
        } else {
            Err(CatalogError::IndexOutOfRange {
                index,
                len: self.themes.len(),
            })
        }
    }

    fn next_id(&self) -> ThemeId {
        let max = self.themes.iter().map(|theme| theme.id.raw()).max().unwrap_or(0);
        if let Some(next) = max.checked_add(1) {
            return ThemeId::new(next);
        }
        let used: FxHashSet<u32> = self.themes.iter().map(|theme| theme.id.raw()).collect();
        let free = (1..=u32::MAX).find(|id| !used.contains(id)).unwrap_or(0);
        warn!(catalog = %self.name, id = free, "theme ids exhausted, reusing a free id");
        ThemeId::new(free)
    }

    fn seed_defaults(&mut self) {
        for (offset, default) in DEFAULT_THEMES.iter().enumerate() {
            let id = ThemeId::new(offset as u32 + 1);
            self.themes
                .push(Theme::new(id, default.name, default.color, default.emojis, None));
        }
        info!(catalog = %self.name, themes = self.themes.len(), "seeded default themes");
        self.persist();
    }

    /// Read the stored list. Any failure counts as "nothing stored".
    fn restore(&self) -> Option<Vec<Theme>> {
        let key = Self::storage_key(&self.name);
        let data = match self.storage.load(&key) {
            Ok(Some(data)) => data,
            Ok(None) => return None,
            Err(err) => {
                warn!(%key, error = %err, "could not read saved themes");
                return None;
            }
        };
        let themes = match serde_json::from_slice::<Vec<Theme>>(&data) {
            Ok(themes) => themes,
            Err(err) => {
                warn!(%key, error = %err, "discarding unreadable saved themes");
                return None;
            }
        };
        let mut ids = FxHashSet::default();
        if let Some(theme) = themes.iter().find(|theme| !ids.insert(theme.id)) {
            warn!(%key, id = %theme.id, "discarding saved themes with a repeated id");
            return None;
        }
        Some(themes)
    }

    fn persist(&mut self) {
        let key = Self::storage_key(&self.name);
        if let Err(err) = self.write(&key) {
            warn!(%key, error = %err, "failed to save themes");
        }
    }

    fn write(&mut self, key: &str) -> Result<(), StorageError> {
        let data = serde_json::to_vec(&self.themes)?;
        self.storage.save(key, &data)
    }
}

fn is_emoji(grapheme: &str) -> bool {
    grapheme.chars().any(|c| {
        matches!(
            u32::from(c),
            0x1F000..=0x1FAFF
                | 0x2600..=0x27BF
                | 0x2300..=0x23FF
                | 0x2B00..=0x2BFF
                | 0x2190..=0x21FF
                | 0x25A0..=0x25FF
                | 0x2934
                | 0x2935
                | 0x203C
                | 0x2049
                | 0x2122
                | 0x2139
                | 0x24C2
                | 0x3030
                | 0x303D
                | 0x3297
                | 0x3299
                | 0x00A9
                | 0x00AE
                | 0xFE0F
                | 0x20E3
        )
    })
}
