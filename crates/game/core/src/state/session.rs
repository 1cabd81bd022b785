//! Session-wide shared resources.
//!
//! Lives, win streak, and the hint budget outlive any single level attempt.
//! They are held in one [`SessionState`] value owned by the embedder and
//! passed by reference into the engine and hint validator, never duplicated
//! per instance and never stored in globals.

/// Shared, single-writer session counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub lives_remaining: u32,
    pub win_streak: u32,
    pub hint_budget: u32,
    /// Set once the player continues a lost attempt; halves the final score.
    pub used_continue: bool,
}

impl SessionState {
    pub fn new(lives_remaining: u32, hint_budget: u32) -> Self {
        Self {
            lives_remaining,
            win_streak: 0,
            hint_budget,
            used_continue: false,
        }
    }

    /// Decrements the hint budget. Callers gate on `hint_budget > 0`.
    pub fn spend_hint(&mut self) {
        debug_assert!(self.hint_budget > 0);
        self.hint_budget = self.hint_budget.saturating_sub(1);
    }

    /// Consumes one life for a continue. Returns false when none remain.
    pub fn consume_life(&mut self) -> bool {
        if self.lives_remaining == 0 {
            return false;
        }
        self.lives_remaining -= 1;
        self.used_continue = true;
        true
    }

    pub fn record_win(&mut self) {
        self.win_streak += 1;
    }

    pub fn record_loss(&mut self) {
        self.win_streak = 0;
    }

    /// Continue usage is scoped to one level attempt.
    pub fn reset_continue(&mut self) {
        self.used_continue = false;
    }
}
