//! Cards - the unit of play in a memory deck.
//!
//! Every deck holds cards in pairs: exactly two cards share a `content`
//! value, and each card carries a `CardId` unique within its deck.

use serde::{Deserialize, Serialize};

/// Identifier for a card, unique within one deck.
///
/// Pair `n` is dealt as cards `2n` and `2n + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub usize);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Ids of the two cards dealt for `pair_index`.
    #[must_use]
    pub const fn pair(pair_index: usize) -> (Self, Self) {
        (Self(pair_index * 2), Self(pair_index * 2 + 1))
    }

    /// The pair this card was dealt from.
    #[must_use]
    pub const fn pair_index(self) -> usize {
        self.0 / 2
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in a memory deck.
///
/// `content` and `id` never change once dealt. The face and match flags
/// are only mutated by [`MemoryGame::choose`](super::MemoryGame::choose).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card<C> {
    /// Is this card showing its content?
    pub is_face_up: bool,

    /// Has this card been paired with its twin? Terminal.
    pub is_matched: bool,

    /// What is printed on the card. Compared for equality only.
    pub content: C,

    /// Unique identifier within the deck.
    pub id: CardId,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: C) -> Self {
        Self {
            is_face_up: false,
            is_matched: false,
            content,
            id,
        }
    }

    /// Face up and still waiting for its twin.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.is_face_up && !self.is_matched
    }
}
