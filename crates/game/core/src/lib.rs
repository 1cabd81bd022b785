//! Deterministic puzzle logic shared across clients.
//!
//! `gemgrid-core` defines the canonical rules of the grid puzzle: panel and
//! player state, the move-resolution engine, hint validation, and scoring.
//! All state mutation flows through [`engine::MovementEngine`], which
//! returns ordered [`events::Event`] lists for rendering, audio, and
//! persistence collaborators to consume. Nothing here performs I/O.
pub mod config;
pub mod engine;
pub mod events;
pub mod hint;
pub mod score;
pub mod state;

pub use config::GameConfig;
pub use engine::{EnginePhase, MoveOutcome, MovementEngine, RejectReason};
pub use events::{Event, HintRefusal, ItemKind, SolveReport};
pub use hint::HintValidator;
pub use score::{ScoreWeights, score};
pub use state::{
    Direction, Grid, GridError, GridModel, Inventory, Overlay, Panel, PlayerSetup, PlayerState,
    Position, SessionState, Terrain, WarpFamily, WarpPair,
};
