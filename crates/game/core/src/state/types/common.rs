use std::fmt;

/// Discrete grid position expressed in panel coordinates (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Stepping with [`Direction::Unknown`] is the identity; the engine
    /// rejects such intents before they reach geometry.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Directional player intent.
///
/// `Unknown` is the sentinel produced when decoding a malformed persisted
/// token; it is never produced by valid play and never accepted by the
/// movement engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Unknown,
}

impl Direction {
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for one step. Rows grow downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Unknown => (0, 0),
        }
    }

    /// Decodes a single persisted token. Malformed tokens decode to
    /// [`Direction::Unknown`] rather than aborting the parse.
    pub fn from_token(token: &str) -> Direction {
        token.trim().parse().unwrap_or(Direction::Unknown)
    }

    /// Decodes a comma-separated token list (e.g. `"up,up,right"`).
    pub fn parse_sequence(encoded: &str) -> Vec<Direction> {
        encoded
            .split(',')
            .filter(|token| !token.trim().is_empty())
            .map(Direction::from_token)
            .collect()
    }

    /// Encodes a sequence back to the comma-separated wire form.
    pub fn encode_sequence(directions: &[Direction]) -> String {
        directions
            .iter()
            .map(Direction::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        let sequence = vec![Direction::Up, Direction::Up, Direction::Right];
        let encoded = Direction::encode_sequence(&sequence);
        assert_eq!(encoded, "up,up,right");
        assert_eq!(Direction::parse_sequence(&encoded), sequence);
    }

    #[test]
    fn malformed_token_decodes_to_unknown() {
        assert_eq!(Direction::from_token("sideways"), Direction::Unknown);
        assert_eq!(
            Direction::parse_sequence("up,sideways,left"),
            vec![Direction::Up, Direction::Unknown, Direction::Left]
        );
    }

    #[test]
    fn empty_sequence_decodes_to_empty() {
        assert!(Direction::parse_sequence("").is_empty());
    }

    #[test]
    fn step_moves_one_panel() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.step(Direction::Up), Position::new(1, 2));
        assert_eq!(origin.step(Direction::Down), Position::new(3, 2));
        assert_eq!(origin.step(Direction::Left), Position::new(2, 1));
        assert_eq!(origin.step(Direction::Right), Position::new(2, 3));
        assert_eq!(origin.step(Direction::Unknown), origin);
    }
}
