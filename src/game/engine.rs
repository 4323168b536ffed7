//! The memory game engine.
//!
//! `MemoryGame` owns a shuffled deck of paired cards and enforces the
//! two-card turn:
//!
//! 1. Choosing a card with nothing pending turns it face up. It becomes
//!    the pending card.
//! 2. Choosing a second card compares it with the pending card. On a
//!    match both stay face up for good and score +2. On a mismatch both
//!    stay visible. Each position that was already seen in an earlier
//!    mismatch costs 1 point.
//! 3. Choosing a third card while two mismatched cards are visible turns
//!    every unmatched card face down except the new choice.
//!
//! ## Example
//!
//! ```
//! use memorize::core::GameRng;
//! use memorize::game::{ChooseOutcome, MemoryGame};
//!
//! let symbols = ['A', 'B'];
//! let mut game = MemoryGame::with_rng(2, GameRng::new(1), |pair| symbols[pair]);
//! assert_eq!(game.cards().len(), 4);
//!
//! let first = game.cards()[0].id;
//! assert_eq!(game.choose(first), ChooseOutcome::Pending);
//! assert_eq!(game.pending_index(), Some(0));
//! ```

use rustc_hash::FxHashSet;
use tracing::debug;

use super::card::{Card, CardId};
use crate::core::GameRng;

/// Result of a [`MemoryGame::choose`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown id, or the card was already face up or matched.
    Ignored,
    /// The card is now the only unmatched face-up card.
    Pending,
    /// The card matched the pending card.
    Matched,
    /// The card did not match. `penalty` points were deducted.
    Mismatched { penalty: i64 },
}

/// Points awarded for finding a pair.
pub const MATCH_BONUS: i64 = 2;

/// Points deducted per already-seen position in a mismatch.
pub const SEEN_PENALTY: i64 = 1;

/// A single game of memory.
#[derive(Clone, Debug)]
pub struct MemoryGame<C> {
    cards: Vec<Card<C>>,
    score: i64,
    seen_indexes: FxHashSet<usize>,
    rng: GameRng,
}

impl<C: Clone + PartialEq> MemoryGame<C> {
    /// Deal a new game with `pair_count` pairs, shuffled from entropy.
    ///
    /// `content` is called once per pair index and must return distinct
    /// values for distinct indices.
    pub fn new(pair_count: usize, content: impl FnMut(usize) -> C) -> Self {
        Self::with_rng(pair_count, GameRng::from_entropy(), content)
    }

    /// Deal a new game using the given RNG for this and later shuffles.
    pub fn with_rng(pair_count: usize, rng: GameRng, mut content: impl FnMut(usize) -> C) -> Self {
        let mut cards = Vec::with_capacity(pair_count * 2);
        for pair_index in 0..pair_count {
            let value = content(pair_index);
            let (first, second) = CardId::pair(pair_index);
            cards.push(Card::new(first, value.clone()));
            cards.push(Card::new(second, value));
        }

        let mut game = Self {
            cards,
            score: 0,
            seen_indexes: FxHashSet::default(),
            rng,
        };
        game.shuffle();
        debug!(pairs = pair_count, seed = game.rng.seed(), "dealt memory game");
        game
    }

    /// Turn a card over.
    ///
    /// Unknown ids and cards that are already face up or matched are
    /// ignored without touching any state.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.cards.iter().position(|card| card.id == id) else {
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up || self.cards[chosen].is_matched {
            return ChooseOutcome::Ignored;
        }

        let Some(pending) = self.pending_index() else {
            self.reveal_only(chosen);
            return ChooseOutcome::Pending;
        };

        let outcome = if self.cards[chosen].content == self.cards[pending].content {
            self.cards[chosen].is_matched = true;
            self.cards[pending].is_matched = true;
            self.score += MATCH_BONUS;
            debug!(chosen = %id, pending = %self.cards[pending].id, score = self.score, "matched pair");
            ChooseOutcome::Matched
        } else {
            let mut penalty = 0;
            for index in [pending, chosen] {
                if !self.seen_indexes.insert(index) {
                    penalty += SEEN_PENALTY;
                }
            }
            self.score -= penalty;
            debug!(chosen = %id, pending = %self.cards[pending].id, penalty, score = self.score, "mismatch");
            ChooseOutcome::Mismatched { penalty }
        };
        self.cards[chosen].is_face_up = true;
        outcome
    }

    /// Randomly reorder the deck. Card states and score are untouched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }
}

impl<C> MemoryGame<C> {
    /// The deck in its current order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Current score. Can be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched).count() / 2
    }

    /// Every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// Position of the single unmatched face-up card, if exactly one exists.
    ///
    /// Returns `None` both when nothing is pending and when two mismatched
    /// cards are still visible.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_pending())
            .map(|(index, _)| index);

        match (face_up.next(), face_up.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }

    /// Turn `index` face up and every other unmatched card face down.
    fn reveal_only(&mut self, index: usize) {
        for (position, card) in self.cards.iter_mut().enumerate() {
            if !card.is_matched {
                card.is_face_up = position == index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ab_game(seed: u64) -> MemoryGame<&'static str> {
        let content = ["A", "B"];
        MemoryGame::with_rng(2, GameRng::new(seed), |pair| content[pair])
    }

    /// Ids of the two cards showing `content`, in deck order.
    fn ids_of(game: &MemoryGame<&'static str>, content: &str) -> (CardId, CardId) {
        let ids: Vec<_> = game
            .cards()
            .iter()
            .filter(|card| card.content == content)
            .map(|card| card.id)
            .collect();
        (ids[0], ids[1])
    }

    fn face_up_unmatched(game: &MemoryGame<&'static str>) -> usize {
        game.cards().iter().filter(|card| card.is_pending()).count()
    }

    #[test]
    fn test_deal_builds_pairs() {
        let game = ab_game(1);

        assert_eq!(game.cards().len(), 4);
        assert_eq!(game.pair_count(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.cards().iter().filter(|c| c.content == "A").count(), 2);
        assert_eq!(game.cards().iter().filter(|c| c.content == "B").count(), 2);

        let mut ids: Vec<_> = game.cards().iter().map(|c| c.id.raw()).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_pair_ids_share_content() {
        let game = ab_game(9);
        for card in game.cards() {
            let twin = game.card(CardId::new(card.id.raw() ^ 1)).unwrap();
            assert_eq!(twin.content, card.content);
        }
    }

    #[test]
    fn test_zero_pairs() {
        let game: MemoryGame<char> = MemoryGame::with_rng(0, GameRng::new(1), |_| 'x');
        assert!(game.cards().is_empty());
        assert!(game.is_complete());
        assert_eq!(game.pending_index(), None);
    }

    #[test]
    fn test_first_choice_becomes_pending() {
        let mut game = ab_game(2);
        let (a1, _) = ids_of(&game, "A");

        assert_eq!(game.choose(a1), ChooseOutcome::Pending);
        assert!(game.card(a1).unwrap().is_face_up);
        assert_eq!(face_up_unmatched(&game), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_match_scores_two() {
        let mut game = ab_game(3);
        let (a1, a2) = ids_of(&game, "A");

        game.choose(a1);
        assert_eq!(game.choose(a2), ChooseOutcome::Matched);

        assert!(game.card(a1).unwrap().is_matched);
        assert!(game.card(a2).unwrap().is_matched);
        assert!(game.card(a1).unwrap().is_face_up);
        assert!(game.card(a2).unwrap().is_face_up);
        assert_eq!(game.score(), 2);
        assert_eq!(game.matched_pair_count(), 1);
        assert_eq!(game.pending_index(), None);
    }

    #[test]
    fn test_first_mismatch_is_free() {
        let mut game = ab_game(4);
        let (a1, _) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");

        game.choose(a1);
        assert_eq!(game.choose(b1), ChooseOutcome::Mismatched { penalty: 0 });
        assert_eq!(game.score(), 0);

        // Both mismatched cards stay visible until the next choice.
        assert_eq!(face_up_unmatched(&game), 2);
        assert_eq!(game.pending_index(), None);
    }

    #[test]
    fn test_third_choice_resets_board() {
        let mut game = ab_game(5);
        let (a1, a2) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");

        game.choose(a1);
        game.choose(b1);
        assert_eq!(game.choose(a2), ChooseOutcome::Pending);

        assert!(!game.card(a1).unwrap().is_face_up);
        assert!(!game.card(b1).unwrap().is_face_up);
        assert!(game.card(a2).unwrap().is_face_up);
        assert_eq!(face_up_unmatched(&game), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_revisited_mismatch_costs_one() {
        let mut game = ab_game(6);
        let (a1, a2) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");

        game.choose(a1);
        game.choose(b1);
        game.choose(a2);
        // b1's position was seen in the first mismatch, a2's is new.
        assert_eq!(game.choose(b1), ChooseOutcome::Mismatched { penalty: 1 });
        assert_eq!(game.score(), -1);
    }

    #[test]
    fn test_same_mismatch_twice_costs_two() {
        let mut game = ab_game(7);
        let (a1, _) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");

        game.choose(a1);
        game.choose(b1);
        game.choose(a1);
        assert_eq!(game.choose(b1), ChooseOutcome::Mismatched { penalty: 2 });
        assert_eq!(game.score(), -2);
    }

    #[test]
    fn test_ignored_choices() {
        let mut game = ab_game(8);
        let (a1, a2) = ids_of(&game, "A");

        assert_eq!(game.choose(CardId::new(99)), ChooseOutcome::Ignored);

        game.choose(a1);
        assert_eq!(game.choose(a1), ChooseOutcome::Ignored);

        game.choose(a2);
        let before = game.cards().to_vec();
        assert_eq!(game.choose(a2), ChooseOutcome::Ignored);
        assert_eq!(game.cards(), before.as_slice());
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn test_matched_cards_survive_reset() {
        let mut game = ab_game(10);
        let (a1, a2) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");

        game.choose(a1);
        game.choose(a2);
        assert_eq!(game.choose(b1), ChooseOutcome::Pending);

        assert!(game.card(a1).unwrap().is_face_up);
        assert!(game.card(a2).unwrap().is_face_up);
        assert_eq!(game.pending_index().map(|i| game.cards()[i].id), Some(b1));
    }

    #[test]
    fn test_full_game_completes() {
        let mut game = ab_game(11);
        let (a1, a2) = ids_of(&game, "A");
        let (b1, b2) = ids_of(&game, "B");

        for id in [a1, a2, b1, b2] {
            game.choose(id);
        }
        assert!(game.is_complete());
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn test_shuffle_keeps_state() {
        let mut game = ab_game(12);
        let (a1, a2) = ids_of(&game, "A");
        let (b1, _) = ids_of(&game, "B");
        game.choose(a1);
        game.choose(a2);
        game.choose(b1);

        let mut before = game.cards().to_vec();
        let score = game.score();
        game.shuffle();
        let mut after = game.cards().to_vec();

        before.sort_by_key(|card| card.id);
        after.sort_by_key(|card| card.id);
        assert_eq!(before, after);
        assert_eq!(game.score(), score);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let first = ab_game(13);
        let second = ab_game(13);
        assert_eq!(first.cards(), second.cards());
    }
}
