//! Data-driven content definitions and loaders.
//!
//! This crate houses the formats levels are authored in and provides the
//! loaders that turn data files into core types:
//! - Level boards (data-driven via RON: terrain legend, overlays, counters,
//!   solution path)
//! - Game tuning (data-driven via TOML: score weights, session budgets)
//!
//! Content is consumed by the runtime when a session starts an attempt and
//! never appears in game state.

pub mod loaders;

pub use loaders::{ConfigLoader, Level, LevelLoader};
