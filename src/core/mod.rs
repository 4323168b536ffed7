//! Core building blocks shared by games: deterministic randomness.

pub mod rng;

pub use rng::GameRng;
