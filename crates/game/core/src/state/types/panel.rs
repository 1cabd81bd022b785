/// Base terrain class of a panel.
///
/// Terrain is immutable during play except for the two sanctioned
/// transitions: `Sand` dissolves to `Lava` once departed, and `EndClosed`
/// opens to `EndOpen` when the last gem is collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Boundary,
    Start,
    EndClosed,
    EndOpen,
    Grass,
    Marsh,
    Ice,
    Sand,
    Lava,
}

impl Terrain {
    /// Boundary panels can never be entered.
    pub fn blocks_entry(self) -> bool {
        matches!(self, Terrain::Boundary)
    }

    pub fn is_end(self) -> bool {
        matches!(self, Terrain::EndClosed | Terrain::EndOpen)
    }
}

/// Warp pairs come in three independent families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarpFamily {
    A,
    B,
    C,
}

impl WarpFamily {
    pub const ALL: [WarpFamily; 3] = [WarpFamily::A, WarpFamily::B, WarpFamily::C];
}

/// Item or obstacle layered on top of a panel's terrain.
///
/// Collectible overlays are cleared once consumed. Warp overlays persist
/// for the lifetime of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overlay {
    #[default]
    None,
    Gem,
    Hammer,
    Sword,
    Heart,
    Boulder,
    Enemy,
    Statue,
    Warp(WarpFamily),
}

/// One grid cell: a terrain class plus an optional overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    pub terrain: Terrain,
    pub overlay: Overlay,
}

impl Panel {
    pub const fn new(terrain: Terrain, overlay: Overlay) -> Self {
        Self { terrain, overlay }
    }

    /// Panel with no overlay.
    pub const fn bare(terrain: Terrain) -> Self {
        Self::new(terrain, Overlay::None)
    }
}
