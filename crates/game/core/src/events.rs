//! Structured events emitted by the core.
//!
//! The engine and hint validator return ordered event lists instead of
//! calling back into a delegate; rendering, audio, and persistence
//! collaborators consume them synchronously after each call.

use crate::state::{Direction, Position};

/// Collectible overlay kinds, as reported in [`Event::ItemConsumed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Gem,
    Hammer,
    Sword,
    Heart,
}

/// Final counters reported when an attempt is solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    pub moves_remaining: i32,
    pub items_found: u32,
    pub enemies_killed: u32,
    pub used_continue: bool,
    pub did_complete_game: bool,
}

/// Why a hint request produced nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HintRefusal {
    /// The session-wide hint budget is exhausted.
    BudgetExhausted,
    /// The attempt has diverged from the solution path.
    OffSolutionPath,
    /// The attempt already covers the whole solution.
    SolutionComplete,
    /// A previous hint is still being displayed.
    AlreadyShowing,
}

/// Ordered event stream produced by one engine or validator call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The player entered a new panel under their own intent.
    Moved { from: Position, to: Position },
    /// An ice chain carried the player over `chain_length` panels.
    Slid { chain_length: u32 },
    ItemConsumed { kind: ItemKind },
    BoulderBroken { position: Position },
    EnemyKilled { position: Position },
    Warped { from: Position, to: Position },
    /// A rejected move bounced the player off an obstacle.
    Knockback { direction: Direction },
    StatueTouched { position: Position },
    /// Sand dissolved to lava behind the player.
    SandDissolved { position: Position },
    /// The last gem was collected and the end panel opened.
    ExitOpened,
    HintShown { direction: Direction },
    HintUnavailable { reason: HintRefusal },
    Solved(SolveReport),
    GameOver,
}
