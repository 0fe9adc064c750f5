//! Line-oriented terminal I/O.
//!
//! Everything the shells print or read goes through `Console`, which keeps
//! the dispatcher independent of the real terminal. `StdConsole` drives a
//! real terminal.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use coal_types::error::{CoalError, Result};

/// Terminal abstraction used by shells, narratives and the boot sequence.
pub trait Console {
    /// Print `prompt` without a newline and read one line.
    ///
    /// The line ending is stripped; nothing else is. Returns `None` at end
    /// of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Print `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Print `text` followed by a carriage return, so the next write
    /// overwrites it.
    fn write_inline(&mut self, text: &str) -> Result<()>;

    /// Clear the screen and home the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Wait for a narrative delay.
    fn pause(&mut self, delay: Duration);
}

/// Error returned when input ends in the middle of a command.
pub fn end_of_input() -> CoalError {
    CoalError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "input closed",
    ))
}

/// Whether `err` is the end-of-input marker from `end_of_input`.
pub fn is_end_of_input(err: &CoalError) -> bool {
    matches!(err, CoalError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

// ---------------------------------------------------------------------------
// StdConsole
// ---------------------------------------------------------------------------

/// Console over any reader/writer pair, with scaled pauses.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    scale: f32,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// `scale` multiplies every pause; `0.0` never sleeps.
    pub fn new(input: R, output: W, scale: f32) -> Self {
        Self {
            input,
            output,
            scale,
        }
    }

    /// Consume the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio(scale: f32) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), scale)
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn write_inline(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}\r")?;
        self.output.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        if self.scale > 0.0 && self.scale.is_finite() {
            std::thread::sleep(delay.mul_f32(self.scale));
        }
    }
}
