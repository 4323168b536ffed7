//! Themes and the persisted theme catalog.
//!
//! ## Key Types
//!
//! - `Theme`: name, color, candidate symbols and pair count
//! - `ThemeCatalog`: ordered themes bound to a storage slot
//! - `ThemeStorage`: where catalogs are saved (`MemoryStorage`, `FileStorage`)

pub mod catalog;
pub mod color;
pub mod defaults;
pub mod storage;
pub mod theme;

pub use catalog::{CatalogError, ThemeCatalog};
pub use color::RgbaColor;
pub use defaults::{DefaultTheme, DEFAULT_THEMES};
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage};
pub use theme::{dedup_symbols, Theme, ThemeId, MIN_PAIRS};
