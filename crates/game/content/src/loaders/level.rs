//! Level board loader.
//!
//! Levels are authored in RON: the terrain layer as one string row per
//! grid row, overlays as sparse (row, col, overlay) triples, plus the
//! player's starting counters and the canonical solution path.

use std::path::Path;

use gemgrid_core::{Direction, Grid, Inventory, Overlay, Panel, PlayerSetup, Terrain};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Terrain legend, one character per panel:
/// `#` boundary, `S` start, `E` closed end, `O` open end, `.` grass,
/// `m` marsh, `i` ice, `s` sand, `l` lava.
fn terrain_for(ch: char) -> LoadResult<Terrain> {
    Ok(match ch {
        '#' => Terrain::Boundary,
        'S' => Terrain::Start,
        'E' => Terrain::EndClosed,
        'O' => Terrain::EndOpen,
        '.' => Terrain::Grass,
        'm' => Terrain::Marsh,
        'i' => Terrain::Ice,
        's' => Terrain::Sand,
        'l' => Terrain::Lava,
        other => anyhow::bail!("unknown terrain character {other:?}"),
    })
}

/// Level data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelDataRon {
    rows: Vec<String>,
    #[serde(default)]
    overlays: Vec<(i32, i32, Overlay)>, // (row, col, overlay)
    moves: i32,
    health: i32,
    #[serde(default)]
    hammers: u32,
    #[serde(default)]
    swords: u32,
    /// Comma-separated direction tokens, e.g. `"up,up,right"`.
    solution: String,
    #[serde(default)]
    final_level: bool,
}

/// A fully loaded level, ready to start an attempt from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub grid: Grid,
    pub setup: PlayerSetup,
    pub solution: Vec<Direction>,
    pub final_level: bool,
}

/// Loader for level boards from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    pub fn load(path: &Path) -> LoadResult<Level> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load level {}: {}", path.display(), e))
    }

    /// Parse a level from RON text.
    pub fn from_str(content: &str) -> LoadResult<Level> {
        let data: LevelDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let mut rows = Vec::with_capacity(data.rows.len());
        for row in &data.rows {
            let panels: LoadResult<Vec<Panel>> = row
                .chars()
                .map(|ch| terrain_for(ch).map(Panel::bare))
                .collect();
            rows.push(panels?);
        }

        for (row, col, overlay) in data.overlays {
            let panel = rows
                .get_mut(row as usize)
                .and_then(|panels| panels.get_mut(col as usize))
                .ok_or_else(|| anyhow::anyhow!("overlay at ({row}, {col}) is off the board"))?;
            panel.overlay = overlay;
        }

        // A malformed board is a content error: fail fast here rather than
        // surfacing a broken grid to the engine.
        let grid = Grid::from_rows(rows)
            .map_err(|e| anyhow::anyhow!("structurally invalid grid: {}", e))?;

        Ok(Level {
            grid,
            setup: PlayerSetup {
                moves: data.moves,
                health: data.health,
                inventory: Inventory::new(data.hammers, data.swords),
            },
            // Malformed tokens decode to the Unknown sentinel; the engine
            // rejects them at play time instead of the parse aborting.
            solution: Direction::parse_sequence(&data.solution),
            final_level: data.final_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemgrid_core::Position;

    const BASIC_LEVEL: &str = r#"(
        rows: ["S.E", "...", "..."],
        overlays: [(0, 1, Gem)],
        moves: 10,
        health: 3,
        solution: "right,right",
    )"#;

    #[test]
    fn loads_board_counters_and_solution() {
        let level = LevelLoader::from_str(BASIC_LEVEL).unwrap();
        assert_eq!(level.grid.size(), 3);
        assert_eq!(level.grid.start(), Position::new(0, 0));
        assert_eq!(
            level.grid.panel(Position::new(0, 1)).unwrap().overlay,
            Overlay::Gem
        );
        assert_eq!(level.setup.moves, 10);
        assert_eq!(level.solution, vec![Direction::Right, Direction::Right]);
        assert!(!level.final_level);
    }

    #[test]
    fn malformed_solution_token_becomes_unknown() {
        let level = LevelLoader::from_str(
            r#"(
                rows: ["SE", ".."],
                moves: 5,
                health: 3,
                solution: "right,diagonal",
            )"#,
        )
        .unwrap();
        assert_eq!(level.solution, vec![Direction::Right, Direction::Unknown]);
    }

    #[test]
    fn unknown_terrain_character_fails() {
        let result = LevelLoader::from_str(
            r#"(
                rows: ["SxE", "...", "..."],
                moves: 5,
                health: 3,
                solution: "",
            )"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn structurally_invalid_board_fails_fast() {
        let result = LevelLoader::from_str(
            r#"(
                rows: ["..", ".."],
                moves: 5,
                health: 3,
                solution: "",
            )"#,
        );
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("invalid grid"), "got: {message}");
    }

    #[test]
    fn off_board_overlay_fails() {
        let result = LevelLoader::from_str(
            r#"(
                rows: ["SE", ".."],
                overlays: [(5, 5, Gem)],
                moves: 5,
                health: 3,
                solution: "",
            )"#,
        );
        assert!(result.is_err());
    }
}
