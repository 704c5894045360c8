//! Scripted stand-ins for the terminal and the random source, for tests
//! and headless runs.

use alloc::{
    collections::VecDeque,
    string::{String, ToString},
    vec::Vec,
};
use core::time::Duration;

use crate::{
    interface::{DisplaySink, InputSource},
    rng::RandomSource,
};

/// Replays a fixed list of input lines, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Display that keeps everything written to it in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    lines: Vec<String>,
    frame_start: usize,
    clears: usize,
    prompts: usize,
    pauses: Vec<Duration>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every line written so far, prompts excluded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines written since the most recent clear.
    pub fn current_screen(&self) -> &[String] {
        &self.lines[self.frame_start..]
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Number of lines equal to `text`.
    pub fn count_line(&self, text: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == text).count()
    }

    pub fn contains_line(&self, text: &str) -> bool {
        self.count_line(text) > 0
    }
}

impl DisplaySink for RecordingDisplay {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.clears += 1;
        self.frame_start = self.lines.len();
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_prompt(&mut self, _prompt: &str) -> anyhow::Result<()> {
        self.prompts += 1;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Deterministic random source cycling through a fixed list of values.
/// Each value is reduced modulo the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = usize>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// How many values have been handed out.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % upper
    }
}
