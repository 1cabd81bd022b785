//! Grid construction errors.
//!
//! A structurally invalid grid is a content authoring error, not a runtime
//! player-facing failure. Level loading fails fast with these instead of
//! tolerating a malformed board.

use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Grids must be at least 2x2.
    #[error("grid size {size} is below the minimum of 2")]
    TooSmall { size: usize },

    /// Every row must match the grid's height.
    #[error("row {row} has {actual} panels, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("grid has no start panel")]
    MissingStart,

    #[error("second start panel found at {position}")]
    ExtraStart { position: Position },

    #[error("grid has no end panel")]
    MissingEnd,

    #[error("second end panel found at {position}")]
    ExtraEnd { position: Position },
}
