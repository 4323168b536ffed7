//! Memory games: the engine and the glue that deals it from a theme.
//!
//! ## Key Types
//!
//! - `Card`: content plus face-up and matched flags
//! - `MemoryGame`: the deck, the pending card and the score
//! - `ThemeGame`: a `MemoryGame<char>` dealt from a `Theme`
//! - `GameSessions`: one `ThemeGame` per theme id, created on demand

pub mod card;
pub mod engine;
pub mod session;
pub mod theme_game;

pub use card::{Card, CardId};
pub use engine::{ChooseOutcome, MemoryGame, MATCH_BONUS, SEEN_PENALTY};
pub use session::GameSessions;
pub use theme_game::ThemeGame;
