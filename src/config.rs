use core::time::Duration;

use crate::common::{ConfigError, Position};

pub const ROWS: usize = 12;
pub const COLS: usize = 30;
pub const NUM_STARS: usize = 6;
pub const NUM_ENEMIES: usize = 3;
/// A star may respawn on turns that are a multiple of this.
pub const RESPAWN_INTERVAL: u32 = 12;
/// Draws allowed for a single mid-game star respawn.
pub const RESPAWN_ATTEMPTS: u32 = 50;
pub const INVALID_KEY_PAUSE: Duration = Duration::from_millis(250);
pub const ALL_COLLECTED_PAUSE: Duration = Duration::from_millis(500);

/// Immutable settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub stars: usize,
    pub enemies: usize,
    pub respawn_interval: u32,
    pub respawn_attempts: u32,
    pub invalid_key_pause: Duration,
    pub all_collected_pause: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            stars: NUM_STARS,
            enemies: NUM_ENEMIES,
            respawn_interval: RESPAWN_INTERVAL,
            respawn_attempts: RESPAWN_ATTEMPTS,
            invalid_key_pause: INVALID_KEY_PAUSE,
            all_collected_pause: ALL_COLLECTED_PAUSE,
        }
    }
}

impl GameConfig {
    /// Where the player stands when the game starts: the centre cell.
    pub fn player_start(&self) -> Position {
        Position::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// Whether `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Total number of cells on the grid.
    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Reject settings under which initial placement could never finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.rows > i32::MAX as usize || self.cols > i32::MAX as usize {
            return Err(ConfigError::GridTooLarge);
        }
        if self.respawn_interval == 0 {
            return Err(ConfigError::ZeroRespawnInterval);
        }
        // player and goal each take a cell too
        let needed = self.stars.saturating_add(self.enemies).saturating_add(2);
        let cells = self.cells();
        if needed > cells {
            return Err(ConfigError::TooManyEntities { needed, cells });
        }
        Ok(())
    }
}
