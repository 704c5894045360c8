use alloc::vec::Vec;

use crate::{
    board::{make_empty_board, Board, ENEMY_GLYPH, GOAL_GLYPH, PLAYER_GLYPH, STAR_GLYPH},
    common::{ConfigError, Direction, Position},
    config::GameConfig,
    placement::{place_unique, respawn_one},
    rng::RandomSource,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    /// An enemy already stood on the player before any move was made.
    LostToInitialOverlap,
    /// An enemy walked onto the player.
    LostToEnemyCollision,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// The five equally likely choices an enemy makes each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Move(Direction),
    Stay,
}

impl EnemyAction {
    pub const COUNT: usize = 5;

    /// 0..4 are up, down, left, right; anything else stays.
    pub fn from_index(index: usize) -> Self {
        match Direction::ALL.get(index) {
            Some(&dir) => EnemyAction::Move(dir),
            None => EnemyAction::Stay,
        }
    }
}

/// What happened while resolving one player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The player actually changed cell.
    pub moved: bool,
    /// A star was picked up this turn.
    pub collected: bool,
    /// Where a star respawned, if one did.
    pub respawned: Option<Position>,
    /// No stars are left on the board after this turn.
    pub all_collected: bool,
    pub status: GameStatus,
}

/// Core game logic: entity positions, score, turn counter and status.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    player: Position,
    goal: Position,
    stars: Vec<Position>,
    enemies: Vec<Position>,
    score: u32,
    turns: u32,
    status: GameStatus,
}

impl GameEngine {
    /// Validate `config` and spawn goal, stars and enemies around the
    /// player's starting cell. All spawned cells are pairwise distinct.
    pub fn new<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = config.player_start();
        let mut reserved = Vec::with_capacity(config.stars + config.enemies + 2);
        reserved.push(player);

        let goal = place_unique(&config, rng, 1, &reserved)[0];
        reserved.push(goal);
        let stars = place_unique(&config, rng, config.stars, &reserved);
        reserved.extend_from_slice(&stars);
        let enemies = place_unique(&config, rng, config.enemies, &reserved);

        log::debug!(
            "spawned player={} goal={} stars={:?} enemies={:?}",
            player,
            goal,
            stars,
            enemies
        );
        Ok(Self::from_layout(config, player, goal, stars, enemies))
    }

    /// Build an engine from known positions, skipping random placement.
    /// Useful for replaying a fixed scenario.
    pub fn with_layout(
        config: GameConfig,
        player: Position,
        goal: Position,
        stars: Vec<Position>,
        enemies: Vec<Position>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_layout(config, player, goal, stars, enemies))
    }

    fn from_layout(
        config: GameConfig,
        player: Position,
        goal: Position,
        stars: Vec<Position>,
        enemies: Vec<Position>,
    ) -> Self {
        Self {
            config,
            player,
            goal,
            stars,
            enemies,
            score: 0,
            turns: 0,
            status: GameStatus::Running,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn stars(&self) -> &[Position] {
        &self.stars
    }

    pub fn enemies(&self) -> &[Position] {
        &self.enemies
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once every star has been picked up.
    pub fn all_collected(&self) -> bool {
        self.stars.is_empty()
    }

    fn enemy_on_player(&self) -> bool {
        self.enemies.contains(&self.player)
    }

    /// Stamp goal, stars, enemies and finally the player onto a fresh grid.
    pub fn board(&self) -> Board {
        let mut board = make_empty_board(self.config.rows, self.config.cols);
        board.stamp(self.goal, GOAL_GLYPH);
        for &star in &self.stars {
            board.stamp(star, STAR_GLYPH);
        }
        for &enemy in &self.enemies {
            board.stamp(enemy, ENEMY_GLYPH);
        }
        board.stamp(self.player, PLAYER_GLYPH);
        board
    }

    /// Win and overlap checks made before reading the player's input.
    pub fn check_start_of_turn(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        if self.player == self.goal {
            self.status = GameStatus::Won;
        } else if self.enemy_on_player() {
            self.status = GameStatus::LostToInitialOverlap;
        }
        self.status
    }

    /// Move the player one cell in `dir` if the target is on the grid,
    /// pick up a star there, and check for the goal. Returns whether the
    /// player moved and whether a star was collected.
    pub fn apply_move(&mut self, dir: Direction) -> (bool, bool) {
        if self.status.is_terminal() {
            return (false, false);
        }
        let candidate = self.player.step(dir);
        let moved = self.config.contains(candidate);
        if moved {
            self.player = candidate;
        }

        let mut collected = false;
        if let Some(idx) = self.stars.iter().position(|&s| s == self.player) {
            self.stars.remove(idx);
            self.score += 1;
            collected = true;
            log::debug!("star collected at {}, score {}", self.player, self.score);
        }

        if self.player == self.goal {
            self.status = GameStatus::Won;
        }
        (moved, collected)
    }

    /// Let every enemy pick a random action, then check whether one
    /// reached the player. Moves off the grid or onto the goal are dropped.
    pub fn move_enemies<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        for i in 0..self.enemies.len() {
            let action = EnemyAction::from_index(rng.next_in_range(EnemyAction::COUNT));
            if let EnemyAction::Move(dir) = action {
                let candidate = self.enemies[i].step(dir);
                if self.config.contains(candidate) && candidate != self.goal {
                    self.enemies[i] = candidate;
                }
            }
        }
        if self.enemy_on_player() {
            self.status = GameStatus::LostToEnemyCollision;
        }
        self.status
    }

    /// On respawn turns, top the stars back up by at most one.
    pub fn maybe_respawn_star<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<Position> {
        if self.turns % self.config.respawn_interval != 0 || self.stars.len() >= self.config.stars {
            return None;
        }
        let mut reserved = Vec::with_capacity(self.stars.len() + 2);
        reserved.push(self.player);
        reserved.push(self.goal);
        reserved.extend_from_slice(&self.stars);
        match respawn_one(&self.config, rng, &reserved) {
            Some(star) => {
                log::debug!("star respawned at {} on turn {}", star, self.turns);
                self.stars.push(star);
                Some(star)
            }
            None => {
                log::debug!("star respawn skipped on turn {}", self.turns);
                None
            }
        }
    }

    /// Resolve one valid direction command: player move, star pickup, goal
    /// check, enemy movement, collision check and star respawn. The turn
    /// counter advances only if the game is still running afterwards.
    pub fn play_turn<R: RandomSource + ?Sized>(
        &mut self,
        dir: Direction,
        rng: &mut R,
    ) -> TurnReport {
        let mut report = TurnReport {
            moved: false,
            collected: false,
            respawned: None,
            all_collected: self.all_collected(),
            status: self.status,
        };
        if self.status.is_terminal() {
            return report;
        }

        let (moved, collected) = self.apply_move(dir);
        report.moved = moved;
        report.collected = collected;
        if self.status == GameStatus::Won {
            report.status = self.status;
            report.all_collected = self.all_collected();
            return report;
        }

        report.status = self.move_enemies(rng);
        if report.status.is_terminal() {
            report.all_collected = self.all_collected();
            return report;
        }

        report.respawned = self.maybe_respawn_star(rng);
        report.all_collected = self.all_collected();
        self.turns += 1;
        report
    }
}
