//! Authoritative level-attempt state.
//!
//! This module owns the panel grid and player counters. Embedders read it
//! freely but mutate it exclusively through the movement engine.

pub mod error;
pub mod session;
pub mod types;

pub use error::GridError;
pub use session::SessionState;
pub use types::{
    Direction, Grid, Inventory, Overlay, Panel, PlayerSetup, PlayerState, Position, Terrain,
    WarpFamily, WarpPair,
};

/// Complete state of one level attempt: the grid plus the player.
///
/// Created once per attempt and replaced wholesale on restart or level
/// change. The player starts on the grid's start panel and the gem counter
/// is derived from the grid's overlays, so the mirror invariant
/// (`gems_remaining + gems_collected == gems on the freshly loaded grid`)
/// holds by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    grid: Grid,
    player: PlayerState,
}

impl GridModel {
    pub fn new(grid: Grid, setup: PlayerSetup) -> Self {
        let player = PlayerState::new(grid.start(), setup, grid.gem_count());
        Self { grid, player }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }
}
