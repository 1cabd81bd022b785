use crate::score::ScoreWeights;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Scoring weights applied when an attempt is solved.
    #[cfg_attr(feature = "serde", serde(default))]
    pub score_weights: ScoreWeights,

    /// Hint budget granted to a fresh session.
    #[cfg_attr(feature = "serde", serde(default = "GameConfig::default_hint_budget"))]
    pub hint_budget: u32,

    /// Lives granted to a fresh session.
    #[cfg_attr(feature = "serde", serde(default = "GameConfig::default_lives"))]
    pub starting_lives: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// One warp pair per family (A, B, C).
    pub const MAX_WARP_PAIRS: usize = 3;
    /// Grids smaller than this cannot hold a distinct start and end.
    pub const MIN_GRID_SIZE: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HINT_BUDGET: u32 = 3;
    pub const DEFAULT_LIVES: u32 = 3;

    pub fn new() -> Self {
        Self {
            score_weights: ScoreWeights::default(),
            hint_budget: Self::DEFAULT_HINT_BUDGET,
            starting_lives: Self::DEFAULT_LIVES,
        }
    }

    #[cfg(feature = "serde")]
    fn default_hint_budget() -> u32 {
        Self::DEFAULT_HINT_BUDGET
    }

    #[cfg(feature = "serde")]
    fn default_lives() -> u32 {
        Self::DEFAULT_LIVES
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
