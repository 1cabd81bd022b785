//! Final score computation.
//!
//! Pure function over the solve report; no hidden state.

use crate::events::SolveReport;

/// Tunable scoring weights, loadable from the game config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    pub move_weight: u32,
    pub item_weight: u32,
    pub kill_weight: u32,
    pub min_time_score: u32,
    pub max_time_score: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            move_weight: 50,
            item_weight: 100,
            kill_weight: 150,
            min_time_score: 100,
            max_time_score: 1_000,
        }
    }
}

/// Maps the final counters to a score. Finishing without a continue doubles
/// the total.
pub fn score(report: &SolveReport, elapsed_seconds: u32, weights: &ScoreWeights) -> u32 {
    let time_score = weights
        .max_time_score
        .saturating_sub(elapsed_seconds)
        .max(weights.min_time_score);

    let base = time_score
        + report.moves_remaining.max(0) as u32 * weights.move_weight
        + report.items_found * weights.item_weight
        + report.enemies_killed * weights.kill_weight;

    base * if report.used_continue { 1 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(moves: i32, items: u32, kills: u32, used_continue: bool) -> SolveReport {
        SolveReport {
            moves_remaining: moves,
            items_found: items,
            enemies_killed: kills,
            used_continue,
            did_complete_game: false,
        }
    }

    #[test]
    fn weighs_counters_and_doubles_without_continue() {
        let weights = ScoreWeights::default();
        let fresh = score(&report(4, 2, 1, false), 200, &weights);
        // (800 + 200 + 200 + 150) * 2
        assert_eq!(fresh, 2_700);

        let continued = score(&report(4, 2, 1, true), 200, &weights);
        assert_eq!(continued, 1_350);
    }

    #[test]
    fn time_score_floors_at_minimum() {
        let weights = ScoreWeights::default();
        let slow = score(&report(0, 0, 0, true), 5_000, &weights);
        assert_eq!(slow, weights.min_time_score);
    }
}
