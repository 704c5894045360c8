//! Common types for gridrun: grid positions, move directions and
//! configuration errors.

/// A cell on the grid, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell in `dir`. May lie outside the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column offsets for a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Errors returned by [`GameConfig::validate`](crate::GameConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Rows or columns are zero.
    EmptyGrid,
    /// Dimensions do not fit the coordinate type.
    GridTooLarge,
    /// Stars, enemies, goal and player cannot all get a cell of their own.
    TooManyEntities { needed: usize, cells: usize },
    /// Respawn interval must be at least one turn.
    ZeroRespawnInterval,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "Grid must have at least one row and one column"),
            ConfigError::GridTooLarge => write!(f, "Grid dimensions are too large"),
            ConfigError::TooManyEntities { needed, cells } => write!(
                f,
                "Cannot place {} unique entities on a grid of {} cells",
                needed, cells
            ),
            ConfigError::ZeroRespawnInterval => write!(f, "Respawn interval must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
