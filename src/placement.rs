//! Rejection-sampling placement of goal, stars and enemies.

use alloc::vec::Vec;

use crate::common::Position;
use crate::config::GameConfig;
use crate::rng::RandomSource;

/// Draw a uniformly random cell of the grid.
pub fn random_cell<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Position {
    let row = rng.next_in_range(config.rows);
    let col = rng.next_in_range(config.cols);
    Position::new(row as i32, col as i32)
}

/// Pick `count` distinct cells, none of which is in `reserved`.
///
/// Draws until enough cells are found, with no attempt limit: callers must
/// make sure the grid has room (see [`GameConfig::validate`]).
pub fn place_unique<R: RandomSource + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
    count: usize,
    reserved: &[Position],
) -> Vec<Position> {
    let mut chosen = Vec::with_capacity(count);
    while chosen.len() < count {
        let cell = random_cell(config, rng);
        if reserved.contains(&cell) || chosen.contains(&cell) {
            continue;
        }
        chosen.push(cell);
    }
    chosen
}

/// Try up to `config.respawn_attempts` draws for a single free cell.
/// Returns `None` when every draw hit a reserved cell.
pub fn respawn_one<R: RandomSource + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
    reserved: &[Position],
) -> Option<Position> {
    (0..config.respawn_attempts)
        .map(|_| random_cell(config, rng))
        .find(|cell| !reserved.contains(cell))
}
