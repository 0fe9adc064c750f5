//! Text progress bar driven alongside a stepped task.

use coal_types::error::Result;

use crate::console::Console;

/// Fixed-width text progress bar: `label[###=====] j/N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    label: String,
    width: usize,
    total: usize,
}

impl ProgressBar {
    pub fn new(label: impl Into<String>, width: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            width,
            total,
        }
    }

    /// Number of steps.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The frame shown after `done` steps.
    pub fn frame(&self, done: usize) -> String {
        let done = done.min(self.total);
        let filled = if self.total == 0 {
            0
        } else {
            self.width * done / self.total
        };
        format!(
            "{}[{}{}] {}/{}",
            self.label,
            "#".repeat(filled),
            "=".repeat(self.width - filled),
            done,
            self.total
        )
    }

    /// Render frame 0, then run each step once and render the frame after
    /// it. Ends with a newline. `N` steps produce `N + 1` frames.
    pub fn drive<F>(&self, console: &mut dyn Console, mut step: F) -> Result<()>
    where
        F: FnMut(&mut dyn Console, usize) -> Result<()>,
    {
        console.write_inline(&self.frame(0))?;
        for i in 0..self.total {
            step(&mut *console, i)?;
            console.write_inline(&self.frame(i + 1))?;
        }
        console.write_line("")
    }
}
