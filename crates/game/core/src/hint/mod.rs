//! Attempt validation against the canonical solution and the purchased
//! hint path.
//!
//! The validator never owns the hint budget: that is session-wide state
//! passed in by reference on each purchase, so every validator in a session
//! draws from the same pool.

use crate::events::HintRefusal;
use crate::state::{Direction, SessionState};

/// Tracks the attempt, solution, and purchased move sequences for one level
/// attempt.
///
/// The solution is loaded once with the level and never changes. The
/// attempt grows with every *accepted* engine move and resets on restart.
/// The purchased sequence only grows through [`HintValidator::request_hint`]
/// and survives pause/resume of the same attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HintValidator {
    solution: Vec<Direction>,
    attempt: Vec<Direction>,
    purchased: Vec<Direction>,
    /// One-at-a-time display discipline: set when a hint is handed out,
    /// released by the caller via [`HintValidator::acknowledge_hint`].
    hint_shown: bool,
    /// Cached eligibility, recomputed after every move and purchase.
    eligible: bool,
}

impl HintValidator {
    pub fn new(solution: Vec<Direction>) -> Self {
        Self {
            solution,
            attempt: Vec::new(),
            purchased: Vec::new(),
            hint_shown: false,
            eligible: true,
        }
    }

    /// Resumes an attempt with a previously purchased path.
    pub fn with_purchased(solution: Vec<Direction>, purchased: Vec<Direction>) -> Self {
        Self {
            purchased,
            ..Self::new(solution)
        }
    }

    pub fn solution(&self) -> &[Direction] {
        &self.solution
    }

    pub fn attempt(&self) -> &[Direction] {
        &self.attempt
    }

    pub fn purchased(&self) -> &[Direction] {
        &self.purchased
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    /// Records one accepted move. Rejected moves are never appended.
    pub fn append_move(&mut self, direction: Direction) {
        self.attempt.push(direction);
    }

    /// Undo support; no-op on an empty attempt.
    pub fn drop_last_move(&mut self) {
        self.attempt.pop();
    }

    /// Resets the attempt on level restart. Purchased hints are retained.
    pub fn clear_attempt(&mut self) {
        self.attempt.clear();
        self.hint_shown = false;
    }

    /// True iff the attempt is a (possibly empty) prefix of the solution.
    /// An attempt longer than the solution is automatically non-matching.
    pub fn is_matching_solution(&self) -> bool {
        self.attempt.len() <= self.solution.len()
            && self
                .attempt
                .iter()
                .zip(self.solution.iter())
                .all(|(taken, expected)| taken == expected)
    }

    pub fn is_attempt_equal_to_purchased(&self) -> bool {
        self.attempt == self.purchased
    }

    pub fn is_attempt_strict_prefix_of_purchased(&self) -> bool {
        self.attempt.len() < self.purchased.len()
            && self
                .attempt
                .iter()
                .zip(self.purchased.iter())
                .all(|(taken, bought)| taken == bought)
    }

    /// Hands out the next solution step, spending budget only when the step
    /// was not purchased before.
    ///
    /// Refuses when the budget is gone, the attempt has diverged from the
    /// solution, no next step exists, or a hint is still being displayed.
    /// Re-requesting a step that was already purchased re-shows it for
    /// free.
    pub fn request_hint(&mut self, session: &mut SessionState) -> Result<Direction, HintRefusal> {
        if self.hint_shown {
            return Err(HintRefusal::AlreadyShowing);
        }
        if session.hint_budget == 0 {
            return Err(HintRefusal::BudgetExhausted);
        }
        if !self.is_matching_solution() {
            return Err(HintRefusal::OffSolutionPath);
        }
        let Some(next) = self.solution.get(self.attempt.len()).copied() else {
            return Err(HintRefusal::SolutionComplete);
        };

        // A step counts as newly purchased only when the purchased path
        // ends exactly where the attempt does.
        if self.purchased.len() == self.attempt.len() {
            session.spend_hint();
            self.purchased.push(next);
        }
        self.hint_shown = true;
        self.refresh_eligibility(session);
        Ok(next)
    }

    /// Releases the one-at-a-time display lock once the rendering layer has
    /// dismissed the hint.
    pub fn acknowledge_hint(&mut self) {
        self.hint_shown = false;
    }

    /// Recomputes cached hint eligibility; called after every move and
    /// after every purchase.
    pub fn refresh_eligibility(&mut self, session: &SessionState) {
        self.eligible = session.hint_budget > 0 && self.is_matching_solution();
    }

    /// Whether a future `request_hint` could currently succeed.
    pub fn is_hint_available(&self) -> bool {
        self.eligible && !self.hint_shown
    }
}
