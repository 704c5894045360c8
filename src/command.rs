//! Turning a line of player input into a command.

use crate::common::Direction;

/// What one line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing but whitespace was entered.
    Empty,
    Move(Direction),
    /// First character was not a direction key.
    Invalid(char),
}

/// Map a W/A/S/D key, in either case, to its direction.
pub fn direction_for_key(key: char) -> Option<Direction> {
    match key.to_ascii_uppercase() {
        'W' => Some(Direction::Up),
        'S' => Some(Direction::Down),
        'A' => Some(Direction::Left),
        'D' => Some(Direction::Right),
        _ => None,
    }
}

/// Only the first non-whitespace character counts; the rest is ignored.
pub fn parse_command(line: &str) -> Command {
    match line.trim_start().chars().next() {
        None => Command::Empty,
        Some(key) => match direction_for_key(key) {
            Some(dir) => Command::Move(dir),
            None => Command::Invalid(key),
        },
    }
}
