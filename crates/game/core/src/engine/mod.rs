//! The movement state machine.
//!
//! [`MovementEngine`] is the authoritative reducer for [`GridModel`]. Every
//! directional intent flows through [`MovementEngine::handle_move`], which
//! resolves the full effect chain (sliding, warping, pickups, costs) before
//! returning, and surfaces the outcome as a value plus an ordered event
//! list. Rejections are never errors.

mod resolve;

use crate::events::{Event, SolveReport};
use crate::state::{Direction, GridModel, SessionState};

/// Why an intent was rejected. Rejections are plain values; most of them
/// cost nothing (see the per-rule cost notes in [`MovementEngine`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// Target is outside the grid or boundary terrain.
    Blocked,
    /// Target holds a boulder and no hammer is carried.
    NeedsHammer,
    /// Target holds an enemy and no sword is carried.
    NeedsSword,
    /// Target holds an inert statue.
    Inert,
    /// A previous `handle_move` call is still resolving.
    EngineBusy,
    /// The attempt already ended in `Solved` or `GameOver`.
    AttemptFinished,
    /// The intent decoded to the `Unknown` sentinel.
    UnknownDirection,
}

/// Tagged outcome of one `handle_move` call.
///
/// Rejected moves still carry events: a chain that slid partway before
/// hitting an obstacle reports the partial slide, and a lethal rejection
/// (enemy contact draining the last heart) carries the `GameOver`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Accepted { events: Vec<Event> },
    Rejected { reason: RejectReason, events: Vec<Event> },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn events(&self) -> &[Event] {
        match self {
            MoveOutcome::Accepted { events } => events,
            MoveOutcome::Rejected { events, .. } => events,
        }
    }
}

/// Where the attempt stands. `Solved` and `GameOver` are terminal; only an
/// external restart or continue replaces the model and resets the phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnginePhase {
    Idle,
    Solved,
    GameOver,
}

impl EnginePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EnginePhase::Idle)
    }
}

/// Deterministic move-resolution engine for one level attempt.
pub struct MovementEngine {
    model: GridModel,
    phase: EnginePhase,
    /// Single-flight invariant: one intent resolves to completion before
    /// the next is accepted.
    in_flight: bool,
    final_level: bool,
}

impl MovementEngine {
    pub fn new(model: GridModel) -> Self {
        Self {
            model,
            phase: EnginePhase::Idle,
            in_flight: false,
            final_level: false,
        }
    }

    /// Marks this attempt as the last level, reflected in the solve report.
    pub fn with_final_level(mut self, final_level: bool) -> Self {
        self.final_level = final_level;
        self
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Resolves one directional intent to completion.
    ///
    /// Validation order per candidate panel, each rule settling the move by
    /// itself:
    /// 1. out of bounds / boundary terrain: rejected, no cost
    /// 2. boulder without hammer: rejected, deferred slide cost only
    /// 3. enemy without sword: rejected, health -1, deferred slide cost only
    /// 4. statue: rejected, never costs
    /// 5. otherwise accepted: relocate, consume overlay, then ice chains,
    ///    warps, and lava resolve before the cost settles
    pub fn handle_move(&mut self, session: &SessionState, direction: Direction) -> MoveOutcome {
        if self.in_flight {
            return MoveOutcome::Rejected {
                reason: RejectReason::EngineBusy,
                events: Vec::new(),
            };
        }
        if self.phase.is_terminal() {
            return MoveOutcome::Rejected {
                reason: RejectReason::AttemptFinished,
                events: Vec::new(),
            };
        }
        if direction == Direction::Unknown {
            return MoveOutcome::Rejected {
                reason: RejectReason::UnknownDirection,
                events: Vec::new(),
            };
        }

        self.in_flight = true;
        let resolution = resolve::resolve_move(&mut self.model, direction);
        let outcome = self.settle(session, resolution);
        self.in_flight = false;
        outcome
    }

    /// Evaluates terminal conditions after resolution. Winning takes
    /// precedence over running out of moves on the same intent.
    fn settle(&mut self, session: &SessionState, resolution: resolve::Resolution) -> MoveOutcome {
        let resolve::Resolution {
            rejection,
            mut events,
        } = resolution;
        let player = self.model.player();

        match rejection {
            None => {
                let solved = player.gems_remaining() == 0
                    && player.position == self.model.grid().end()
                    && !player.is_dead();
                if solved {
                    self.phase = EnginePhase::Solved;
                    events.push(Event::Solved(SolveReport {
                        moves_remaining: player.moves_remaining(),
                        items_found: player.items_found(),
                        enemies_killed: player.enemies_killed(),
                        used_continue: session.used_continue,
                        did_complete_game: self.final_level,
                    }));
                } else if player.is_out_of_moves() || player.is_dead() {
                    self.phase = EnginePhase::GameOver;
                    events.push(Event::GameOver);
                }
                MoveOutcome::Accepted { events }
            }
            Some(reason) => {
                // Deferred slide costs and enemy-contact damage can end the
                // attempt even though the intent itself was rejected.
                if player.is_out_of_moves() || player.is_dead() {
                    self.phase = EnginePhase::GameOver;
                    events.push(Event::GameOver);
                }
                MoveOutcome::Rejected { reason, events }
            }
        }
    }
}
