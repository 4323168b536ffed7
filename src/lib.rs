//! # memorize
//!
//! A matching-pairs memory game engine with a persisted theme catalog.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the deck**: cards, score and seen positions only change
//!    through `MemoryGame::choose` and `MemoryGame::shuffle`.
//!
//! 2. **Themes configure, engines play**: a game reads its theme once,
//!    when it is dealt. Editing a theme never reaches into a running game;
//!    callers re-deal through `GameSessions`.
//!
//! 3. **Explicit catalog**: `ThemeCatalog` is constructed by the caller
//!    and passed by reference. Every mutation is persisted before it
//!    returns.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `game`: cards, the engine, theme-dealt games and per-theme sessions
//! - `themes`: theme records, the catalog and its storage backends
//!
//! ## Example
//!
//! ```
//! use memorize::{GameRng, GameSessions, MemoryStorage, ThemeCatalog};
//!
//! let catalog = ThemeCatalog::open("Default", MemoryStorage::new());
//! let mut sessions = GameSessions::with_rng(GameRng::new(7));
//!
//! let game = sessions.game_for(catalog.theme_at(0));
//! let first = game.cards()[0].id;
//! game.choose(first);
//! assert_eq!(game.score(), 0);
//! ```

pub mod core;
pub mod game;
pub mod themes;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::game::{Card, CardId, ChooseOutcome, GameSessions, MemoryGame, ThemeGame};

pub use crate::themes::{
    CatalogError, FileStorage, MemoryStorage, RgbaColor, StorageError, Theme, ThemeCatalog, ThemeId,
    ThemeStorage,
};
