use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::error::GridError;

use super::{Overlay, Panel, Position, Terrain, WarpFamily};

type WarpTable = ArrayVec<WarpPair, { GameConfig::MAX_WARP_PAIRS }>;

/// Two panels of the same warp family that teleport the player between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarpPair {
    pub family: WarpFamily,
    pub a: Position,
    pub b: Position,
}

impl WarpPair {
    /// The opposite end of the pair, or `None` if `position` is not a member.
    pub fn partner_of(&self, position: Position) -> Option<Position> {
        if position == self.a {
            Some(self.b)
        } else if position == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Square, row-major panel grid with the start/end positions and warp table
/// discovered at construction time.
///
/// Construction is the only fallible operation: a structurally invalid grid
/// is a content error and fails fast with [`GridError`]. Every accessor
/// afterwards is total over in-bounds positions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    panels: Vec<Panel>,
    start: Position,
    end: Position,
    warps: WarpTable,
}

impl Grid {
    /// Builds a grid from row-major panel rows, validating structure and
    /// scanning for warp pairs.
    ///
    /// A warp family is "complete" only once two members are discovered;
    /// the first two occurrences form the pair and any further member of
    /// the same family is ignored. Incomplete families stay off the warp
    /// table and behave as ordinary terrain.
    pub fn from_rows(rows: Vec<Vec<Panel>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size < GameConfig::MIN_GRID_SIZE {
            return Err(GridError::TooSmall { size });
        }
        for (row, panels) in rows.iter().enumerate() {
            if panels.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    actual: panels.len(),
                });
            }
        }

        let mut start = None;
        let mut end = None;
        let mut warp_members: [Vec<Position>; 3] = [Vec::new(), Vec::new(), Vec::new()];

        for (row, panels) in rows.iter().enumerate() {
            for (col, panel) in panels.iter().enumerate() {
                let position = Position::new(row as i32, col as i32);
                match panel.terrain {
                    Terrain::Start => match start {
                        None => start = Some(position),
                        Some(_) => return Err(GridError::ExtraStart { position }),
                    },
                    Terrain::EndClosed | Terrain::EndOpen => match end {
                        None => end = Some(position),
                        Some(_) => return Err(GridError::ExtraEnd { position }),
                    },
                    _ => {}
                }
                if let Overlay::Warp(family) = panel.overlay {
                    let members = &mut warp_members[family as usize];
                    if members.len() < 2 {
                        members.push(position);
                    }
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;

        let mut warps = WarpTable::new();
        for (family, members) in WarpFamily::ALL.iter().zip(warp_members.iter()) {
            if let [a, b] = members.as_slice() {
                warps.push(WarpPair {
                    family: *family,
                    a: *a,
                    b: *b,
                });
            }
        }

        Ok(Self {
            size,
            panels: rows.into_iter().flatten().collect(),
            start,
            end,
            warps,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.size as i32
            && position.col < self.size as i32
    }

    pub fn panel(&self, position: Position) -> Option<&Panel> {
        self.contains(position)
            .then(|| &self.panels[self.index(position)])
    }

    pub fn panel_mut(&mut self, position: Position) -> Option<&mut Panel> {
        if self.contains(position) {
            let index = self.index(position);
            Some(&mut self.panels[index])
        } else {
            None
        }
    }

    /// Complete warp pairs discovered at construction.
    pub fn warp_pairs(&self) -> &[WarpPair] {
        &self.warps
    }

    /// The paired warp destination for `position`, if it is a member of a
    /// complete pair.
    pub fn warp_partner(&self, position: Position) -> Option<Position> {
        self.warps
            .iter()
            .find_map(|pair| pair.partner_of(position))
    }

    /// Flips the end panel from closed to open. Returns whether a flip
    /// happened (already-open exits are left alone).
    pub fn open_exit(&mut self) -> bool {
        let index = self.index(self.end);
        if self.panels[index].terrain == Terrain::EndClosed {
            self.panels[index].terrain = Terrain::EndOpen;
            true
        } else {
            false
        }
    }

    /// Number of gem overlays still on the grid.
    pub fn gem_count(&self) -> u32 {
        self.panels
            .iter()
            .filter(|panel| panel.overlay == Overlay::Gem)
            .count() as u32
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.size + position.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_rows(size: usize) -> Vec<Vec<Panel>> {
        vec![vec![Panel::bare(Terrain::Grass); size]; size]
    }

    fn valid_rows() -> Vec<Vec<Panel>> {
        let mut rows = bare_rows(3);
        rows[0][0] = Panel::bare(Terrain::Start);
        rows[2][2] = Panel::bare(Terrain::EndClosed);
        rows
    }

    #[test]
    fn builds_and_locates_start_and_end() {
        let grid = Grid::from_rows(valid_rows()).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.end(), Position::new(2, 2));
    }

    #[test]
    fn rejects_missing_start() {
        let mut rows = bare_rows(3);
        rows[2][2] = Panel::bare(Terrain::EndClosed);
        assert_eq!(Grid::from_rows(rows), Err(GridError::MissingStart));
    }

    #[test]
    fn rejects_duplicate_end() {
        let mut rows = valid_rows();
        rows[1][1] = Panel::bare(Terrain::EndOpen);
        assert!(matches!(
            Grid::from_rows(rows),
            Err(GridError::ExtraEnd { .. })
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut rows = valid_rows();
        rows[1].pop();
        assert!(matches!(
            Grid::from_rows(rows),
            Err(GridError::NotSquare { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_undersized_grid() {
        let rows = vec![vec![Panel::bare(Terrain::Start)]];
        assert_eq!(Grid::from_rows(rows), Err(GridError::TooSmall { size: 1 }));
    }

    #[test]
    fn complete_warp_pair_is_symmetric() {
        let mut rows = valid_rows();
        rows[0][2] = Panel::new(Terrain::Grass, Overlay::Warp(WarpFamily::A));
        rows[2][0] = Panel::new(Terrain::Grass, Overlay::Warp(WarpFamily::A));
        let grid = Grid::from_rows(rows).unwrap();

        let a = Position::new(0, 2);
        let b = Position::new(2, 0);
        assert_eq!(grid.warp_partner(a), Some(b));
        assert_eq!(grid.warp_partner(b), Some(a));
    }

    #[test]
    fn lone_warp_panel_has_no_partner() {
        let mut rows = valid_rows();
        rows[0][2] = Panel::new(Terrain::Grass, Overlay::Warp(WarpFamily::B));
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.warp_partner(Position::new(0, 2)), None);
        assert!(grid.warp_pairs().is_empty());
    }

    #[test]
    fn open_exit_flips_closed_end_once() {
        let mut grid = Grid::from_rows(valid_rows()).unwrap();
        assert!(grid.open_exit());
        assert_eq!(grid.panel(grid.end()).unwrap().terrain, Terrain::EndOpen);
        assert!(!grid.open_exit());
    }
}
