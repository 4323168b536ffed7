//! Games kept per theme.
//!
//! A caller browsing a catalog keeps one running game per theme.
//! `GameSessions` makes that explicit: a game is dealt the first time its
//! theme is opened, and it is dealt again only when the caller says the
//! theme changed.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::theme_game::ThemeGame;
use crate::core::GameRng;
use crate::themes::{Theme, ThemeCatalog, ThemeId, ThemeStorage};

/// Running games keyed by theme id.
#[derive(Debug)]
pub struct GameSessions {
    games: FxHashMap<ThemeId, ThemeGame>,
    rng: GameRng,
}

impl Default for GameSessions {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSessions {
    /// Sessions seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Sessions whose games fork their RNGs from `rng`.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            games: FxHashMap::default(),
            rng,
        }
    }

    /// The game for `theme`, dealing it on first access.
    pub fn game_for(&mut self, theme: &Theme) -> &mut ThemeGame {
        let rng = &mut self.rng;
        self.games.entry(theme.id).or_insert_with(|| {
            debug!(theme = %theme.id, "opening game session");
            ThemeGame::with_rng(theme.clone(), rng.fork())
        })
    }

    /// The game for a theme id, if one has been dealt.
    #[must_use]
    pub fn get(&self, id: ThemeId) -> Option<&ThemeGame> {
        self.games.get(&id)
    }

    pub fn get_mut(&mut self, id: ThemeId) -> Option<&mut ThemeGame> {
        self.games.get_mut(&id)
    }

    /// Forget the game for a theme. The next `game_for` deals a new one.
    pub fn invalidate(&mut self, id: ThemeId) -> Option<ThemeGame> {
        self.games.remove(&id)
    }

    /// Re-deal the game for an edited theme, if one is running.
    ///
    /// Returns `false` when the theme had no game.
    pub fn refresh(&mut self, theme: &Theme) -> bool {
        match self.games.get_mut(&theme.id) {
            Some(game) => {
                debug!(theme = %theme.id, "theme edited, re-dealing");
                game.change_theme(theme.clone());
                true
            }
            None => false,
        }
    }

    /// Drop games whose theme is no longer in `catalog`.
    pub fn retain_catalog<S: ThemeStorage>(&mut self, catalog: &ThemeCatalog<S>) {
        self.games.retain(|id, _| catalog.theme(*id).is_some());
    }

    /// Number of games dealt.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
