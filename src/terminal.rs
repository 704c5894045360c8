#![cfg(feature = "std")]
//! Real terminal: ANSI-cleared screen on a writer, lines from a reader.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;
use std::time::Duration;

use crate::interface::{DisplaySink, InputSource};

/// Moves the cursor home and wipes the screen.
pub const ANSI_CLEAR: &str = "\x1B[2J\x1B[H";

/// Full-screen display over any writer, stdout by default.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.out.write_all(ANSI_CLEAR.as_bytes())?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        // make sure the notice is on screen while we wait
        if let Err(err) = self.out.flush() {
            log::warn!("flush before pause failed: {}", err);
        }
        std::thread::sleep(duration);
    }
}

/// Line-at-a-time input over any buffered reader, stdin by default.
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }
        // bytes that are not UTF-8 become U+FFFD and read as an invalid key
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
