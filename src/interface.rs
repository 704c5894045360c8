//! Capabilities the turn loop needs from the outside world.

use alloc::string::String;
use core::time::Duration;

/// Where frames and messages are written.
pub trait DisplaySink {
    /// Wipe the surface before a full redraw.
    fn clear(&mut self) -> anyhow::Result<()>;

    /// Write one line of text followed by a newline.
    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;

    /// Write text without a newline, e.g. an input prompt.
    fn write_prompt(&mut self, prompt: &str) -> anyhow::Result<()>;

    /// Hold the current screen for `duration` so the player can read it.
    fn pause(&mut self, _duration: Duration) {}
}

/// Supplies one line of player input per call.
pub trait InputSource {
    /// Next line without its terminator, or `None` once input is exhausted.
    fn next_line(&mut self) -> anyhow::Result<Option<String>>;
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn clear(&mut self) -> anyhow::Result<()> {
        (**self).clear()
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        (**self).write_line(line)
    }

    fn write_prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        (**self).write_prompt(prompt)
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        (**self).next_line()
    }
}
