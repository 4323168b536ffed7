//! A memory game dealt from a theme.
//!
//! Each deal draws `num_pairs` distinct symbols at random from the theme,
//! so the deck always satisfies the engine's one-symbol-per-pair contract.

use tracing::debug;

use super::card::{Card, CardId};
use super::engine::{ChooseOutcome, MemoryGame};
use crate::core::GameRng;
use crate::themes::{RgbaColor, Theme};

/// A `MemoryGame<String>` together with the theme it was dealt from.
#[derive(Clone, Debug)]
pub struct ThemeGame {
    theme: Theme,
    model: MemoryGame<String>,
    rng: GameRng,
}

impl ThemeGame {
    /// Deal a game for `theme`, seeded from entropy.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_rng(theme, GameRng::from_entropy())
    }

    /// Deal a game for `theme`. Later deals fork from `rng`.
    #[must_use]
    pub fn with_rng(theme: Theme, mut rng: GameRng) -> Self {
        let model = deal(&theme, &mut rng);
        Self { theme, model, rng }
    }

    /// Theme this game was dealt from.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    #[must_use]
    pub fn theme_color(&self) -> RgbaColor {
        self.theme.color
    }

    #[must_use]
    pub fn cards(&self) -> &[Card<String>] {
        self.model.cards()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.model.score()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.model.is_complete()
    }

    /// The underlying engine.
    #[must_use]
    pub fn model(&self) -> &MemoryGame<String> {
        &self.model
    }

    // === Intents ===

    /// Throw the deck away and deal again from the same theme.
    pub fn new_game(&mut self) {
        self.model = deal(&self.theme, &mut self.rng);
    }

    /// Switch to another theme and deal a fresh game.
    pub fn change_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.new_game();
    }

    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        self.model.choose(id)
    }

    pub fn shuffle(&mut self) {
        self.model.shuffle();
    }
}

fn deal(theme: &Theme, rng: &mut GameRng) -> MemoryGame<String> {
    let symbols = rng.sample(&theme.symbols(), theme.num_pairs);
    debug!(theme = %theme.id, pairs = symbols.len(), "dealing theme game");
    MemoryGame::with_rng(symbols.len(), rng.fork(), |pair| symbols[pair].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::{MemoryStorage, ThemeCatalog};

    fn letters(num_pairs: usize) -> Theme {
        let mut catalog = ThemeCatalog::open("Test", MemoryStorage::new());
        let id = catalog.add_theme("Letters", RgbaColor::BLUE, "abcdef", Some(num_pairs), 0);
        catalog.theme(id).cloned().unwrap()
    }

    #[test]
    fn test_deals_num_pairs_distinct_symbols() {
        let game = ThemeGame::with_rng(letters(4), GameRng::new(1));

        assert_eq!(game.cards().len(), 8);
        let mut symbols: Vec<&str> = game.cards().iter().map(|card| card.content.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 4);
        assert!(symbols.iter().all(|s| "abcdef".contains(s)));
    }

    #[test]
    fn test_sequence_symbols_deal_whole() {
        let mut catalog = ThemeCatalog::open("Test", MemoryStorage::new());
        let id = catalog.add_theme("Hands", RgbaColor::ORANGE, "👍🏽👍🏿🐻‍❄️", None, 0);
        let theme = catalog.theme(id).cloned().unwrap();

        let game = ThemeGame::with_rng(theme, GameRng::new(5));
        assert_eq!(game.cards().len(), 6);

        let mut symbols: Vec<&str> = game.cards().iter().map(|card| card.content.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        let mut expected = vec!["👍🏽", "👍🏿", "🐻‍❄️"];
        expected.sort_unstable();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn test_theme_accessors() {
        let game = ThemeGame::with_rng(letters(2), GameRng::new(1));
        assert_eq!(game.theme_name(), "Letters");
        assert_eq!(game.theme_color(), RgbaColor::BLUE);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_new_game_resets_score() {
        let mut game = ThemeGame::with_rng(letters(3), GameRng::new(2));
        let first = game.cards()[0].clone();
        let twin = game
            .cards()
            .iter()
            .find(|card| card.content == first.content && card.id != first.id)
            .map(|card| card.id)
            .unwrap();

        game.choose(first.id);
        assert_eq!(game.choose(twin), ChooseOutcome::Matched);
        assert_eq!(game.score(), 2);

        game.new_game();
        assert_eq!(game.score(), 0);
        assert!(game.cards().iter().all(|card| !card.is_face_up && !card.is_matched));
    }

    #[test]
    fn test_change_theme_redeals() {
        let mut game = ThemeGame::with_rng(letters(2), GameRng::new(3));
        let mut bigger = letters(5);
        bigger.name = "Bigger".to_string();

        game.change_theme(bigger);
        assert_eq!(game.theme_name(), "Bigger");
        assert_eq!(game.cards().len(), 10);
    }
}
