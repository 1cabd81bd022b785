//! Session orchestration for the deterministic puzzle core.
//!
//! This crate wires levels, the movement engine, the hint validator, and
//! the shared session counters into one [`GameSession`] that embedders
//! drive turn by turn. It owns the lifecycle the core deliberately leaves
//! outside: starting attempts, restarts, continues, and forwarding
//! accepted moves into the hint validator. Every emitted event is logged
//! through `tracing` for the rendering/audio collaborators' benefit.

mod error;
mod session;

pub use error::SessionError;
pub use session::GameSession;
