//! The turn loop: render, read a command, resolve it, repeat.

use alloc::format;

use crate::{
    board::draw_board,
    command::{parse_command, Command},
    game::{GameEngine, GameStatus},
    interface::{DisplaySink, InputSource},
    rng::RandomSource,
};

pub const PROMPT: &str = "Move (W/A/S/D): ";
pub const WIN_MESSAGE: &str = "You reached the goal. You win!";
pub const OVERLAP_MESSAGE: &str = "You bumped into an enemy. Game over.";
pub const CAUGHT_MESSAGE: &str = "An enemy caught you. Game over.";
pub const INVALID_KEY_MESSAGE: &str = "Invalid key. Use W/A/S/D.";
pub const ALL_COLLECTED_MESSAGE: &str = "All stars collected. Now go to G for a bonus!";
pub const CLOSING_MESSAGE: &str = "Thanks for playing.";

/// How a session ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    LostToInitialOverlap,
    LostToEnemyCollision,
    /// Input closed before the game was decided.
    InputExhausted,
}

/// Final result handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub score: u32,
    pub turns: u32,
}

/// Line printed with the final score and turn count.
pub fn summary_line(score: u32, turns: u32) -> alloc::string::String {
    format!("Final score: {}   Turns: {}", score, turns)
}

/// Owns the engine and the I/O capabilities for one game.
pub struct Session<I: InputSource, D: DisplaySink> {
    engine: GameEngine,
    input: I,
    display: D,
}

impl<I: InputSource, D: DisplaySink> Session<I, D> {
    pub fn new(engine: GameEngine, input: I, display: D) -> Self {
        Self {
            engine,
            input,
            display,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_parts(self) -> (GameEngine, I, D) {
        (self.engine, self.input, self.display)
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let board = self.engine.board();
        draw_board(
            &mut self.display,
            &board,
            self.engine.score(),
            self.engine.turns(),
        )
    }

    fn announce(&mut self, message: &str) -> anyhow::Result<()> {
        self.display.write_line("")?;
        self.display.write_line(message)
    }

    /// Play until the game is won or lost or input runs out, then print
    /// the final summary.
    pub fn run<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> anyhow::Result<Summary> {
        let outcome = loop {
            self.redraw()?;
            match self.engine.check_start_of_turn() {
                GameStatus::Running => {}
                GameStatus::Won => {
                    self.announce(WIN_MESSAGE)?;
                    break Outcome::Won;
                }
                GameStatus::LostToInitialOverlap | GameStatus::LostToEnemyCollision => {
                    self.announce(OVERLAP_MESSAGE)?;
                    break Outcome::LostToInitialOverlap;
                }
            }

            self.display.write_prompt(PROMPT)?;
            let line = match self.input.next_line()? {
                Some(line) => line,
                None => {
                    log::info!("input closed on turn {}", self.engine.turns());
                    break Outcome::InputExhausted;
                }
            };

            let dir = match parse_command(&line) {
                Command::Empty => continue,
                Command::Invalid(key) => {
                    log::debug!("rejected key {:?}", key);
                    self.display.write_line(INVALID_KEY_MESSAGE)?;
                    self.display.pause(self.engine.config().invalid_key_pause);
                    continue;
                }
                Command::Move(dir) => dir,
            };

            let report = self.engine.play_turn(dir, rng);
            match report.status {
                GameStatus::Running => {
                    if report.all_collected {
                        self.announce(ALL_COLLECTED_MESSAGE)?;
                        self.display.pause(self.engine.config().all_collected_pause);
                    }
                }
                GameStatus::Won => {
                    self.redraw()?;
                    self.announce(WIN_MESSAGE)?;
                    break Outcome::Won;
                }
                GameStatus::LostToEnemyCollision | GameStatus::LostToInitialOverlap => {
                    self.redraw()?;
                    self.announce(CAUGHT_MESSAGE)?;
                    break Outcome::LostToEnemyCollision;
                }
            }
        };

        let summary = Summary {
            outcome,
            score: self.engine.score(),
            turns: self.engine.turns(),
        };
        log::info!(
            "game over: {:?} with score {} after {} turns",
            summary.outcome,
            summary.score,
            summary.turns
        );
        self.display.write_line("")?;
        self.display.write_line(&summary_line(summary.score, summary.turns))?;
        self.display.write_line(CLOSING_MESSAGE)?;
        Ok(summary)
    }
}

/// Convenience wrapper: run a whole game with borrowed capabilities.
pub fn run_session<R, I, D>(
    engine: GameEngine,
    rng: &mut R,
    input: &mut I,
    display: &mut D,
) -> anyhow::Result<Summary>
where
    R: RandomSource + ?Sized,
    I: InputSource + ?Sized,
    D: DisplaySink + ?Sized,
{
    Session::new(engine, input, display).run(rng)
}
