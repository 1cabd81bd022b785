//! Value types that make up the grid model.

mod common;
mod grid;
mod panel;
mod player;

pub use common::{Direction, Position};
pub use grid::{Grid, WarpPair};
pub use panel::{Overlay, Panel, Terrain, WarpFamily};
pub use player::{Inventory, PlayerSetup, PlayerState};
