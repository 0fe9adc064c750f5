//! Shared fixtures for command and session tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use coal_audio::RecordingNotifier;
use coal_content::MemoryContent;
use coal_platform::{FixedClock, GameLauncher, SystemTime};
use coal_types::config::AuthPolicy;
use coal_types::error::{CoalError, Result};

use crate::console::Console;
use crate::shell::{Environment, ShellId};
use crate::vault::Vault;

/// Launcher that records commands instead of running them.
#[derive(Debug, Default)]
pub(crate) struct MockLauncher {
    pub launched: RefCell<Vec<Vec<String>>>,
    pub fail: bool,
}

impl GameLauncher for MockLauncher {
    fn launch(&self, command: &[String]) -> Result<i32> {
        if self.fail {
            return Err(CoalError::Launch("no such game".to_string()));
        }
        self.launched.borrow_mut().push(command.to_vec());
        Ok(0)
    }
}

pub(crate) const NOW: SystemTime = SystemTime {
    year: 2026,
    month: 3,
    day: 7,
    hour: 14,
    minute: 5,
    second: 59,
};

/// Owns every service an `Environment` borrows.
pub(crate) struct Harness {
    pub console: ScriptedConsole,
    pub content: MemoryContent,
    pub notifier: RecordingNotifier,
    pub clock: FixedClock,
    pub launcher: MockLauncher,
    pub vault: Vault,
    pub policy: AuthPolicy,
    pub snake: Vec<String>,
}

impl Harness {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            console: ScriptedConsole::new(inputs.iter().copied()),
            content: MemoryContent::builtin(),
            notifier: RecordingNotifier::new(),
            clock: FixedClock(NOW),
            launcher: MockLauncher::default(),
            vault: Vault::standard(),
            policy: AuthPolicy::LegacyPrimaryOnly,
            snake: vec!["snake".to_string()],
        }
    }

    pub fn env(&mut self, shell: ShellId) -> Environment<'_> {
        Environment {
            console: &mut self.console,
            content: &self.content,
            notifier: &self.notifier,
            time: &self.clock,
            launcher: &self.launcher,
            vault: &self.vault,
            policy: self.policy,
            snake: &self.snake,
            shell,
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted console
// ---------------------------------------------------------------------------

/// One recorded console event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A prompt shown by `read_line`.
    Prompt(String),
    /// A full line of output.
    Text(String),
    /// An overwritable line (progress frames).
    Inline(String),
    /// A screen clear.
    Clear,
}

/// Console fed from a queue of input lines, recording everything it shows.
///
/// Pauses are recorded but never slept.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<Line>,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            pauses: Vec::new(),
        }
    }

    /// Queue another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Input lines not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Every recorded event, oldest first.
    pub fn transcript(&self) -> &[Line] {
        &self.transcript
    }

    /// Every prompt shown, oldest first.
    pub fn prompts(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|l| match l {
                Line::Prompt(p) => Some(p.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every full output line, oldest first.
    pub fn lines(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|l| match l {
                Line::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every inline (overwritten) frame, oldest first.
    pub fn frames(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|l| match l {
                Line::Inline(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All output text joined with newlines.
    pub fn output_text(&self) -> String {
        self.transcript
            .iter()
            .filter_map(|l| match l {
                Line::Text(t) | Line::Inline(t) => Some(t.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether any full output line equals `text`.
    pub fn printed(&self, text: &str) -> bool {
        self.lines().contains(&text)
    }

    /// How many full output lines equal `text`.
    pub fn count(&self, text: &str) -> usize {
        self.lines().iter().filter(|l| **l == text).count()
    }

    /// Number of screen clears.
    pub fn clears(&self) -> usize {
        self.transcript.iter().filter(|l| **l == Line::Clear).count()
    }

    /// Every pause requested, oldest first.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of every pause requested.
    pub fn total_pause(&self) -> Duration {
        self.pauses.iter().sum()
    }

    /// Forget the transcript and pauses, keeping queued input.
    pub fn reset_transcript(&mut self) {
        self.transcript.clear();
        self.pauses.clear();
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(Line::Prompt(prompt.to_string()));
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.transcript.push(Line::Text(text.to_string()));
        Ok(())
    }

    fn write_inline(&mut self, text: &str) -> Result<()> {
        self.transcript.push(Line::Inline(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.transcript.push(Line::Clear);
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

mod tests {
    use super::*;

    #[test]
    fn scripted_replays_inputs_then_ends() {
        let mut c = ScriptedConsole::new(["a", "b"]);
        assert_eq!(c.read_line("p1").unwrap().as_deref(), Some("a"));
        assert_eq!(c.read_line("p2").unwrap().as_deref(), Some("b"));
        assert_eq!(c.read_line("p3").unwrap(), None);
        assert_eq!(c.prompts(), vec!["p1", "p2", "p3"]);
        assert_eq!(c.remaining_inputs(), 0);
    }

    #[test]
    fn scripted_records_transcript() {
        let mut c = ScriptedConsole::default();
        c.write_line("one").unwrap();
        c.clear().unwrap();
        c.write_inline("frame").unwrap();
        c.write_line("one").unwrap();
        assert_eq!(c.lines(), vec!["one", "one"]);
        assert_eq!(c.frames(), vec!["frame"]);
        assert_eq!(c.clears(), 1);
        assert_eq!(c.count("one"), 2);
        assert!(c.printed("one"));
        assert!(!c.printed("two"));
        assert_eq!(c.output_text(), "one\nframe\none");
    }

    #[test]
    fn scripted_records_pauses() {
        let mut c = ScriptedConsole::default();
        c.pause(Duration::from_millis(1500));
        c.pause(Duration::from_millis(500));
        assert_eq!(c.pauses().len(), 2);
        assert_eq!(c.total_pause(), Duration::from_secs(2));
        c.reset_transcript();
        assert!(c.pauses().is_empty());
    }

    #[test]
    fn push_input_appends() {
        let mut c = ScriptedConsole::new(["first"]);
        c.push_input("second");
        assert_eq!(c.remaining_inputs(), 2);
    }
}
