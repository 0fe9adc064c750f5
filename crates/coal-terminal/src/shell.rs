//! Shell identity, command trait and dispatch.
//!
//! A `Shell` is an ordered table of commands plus a fallback message. The
//! session keeps a stack of `ShellId`s and hands each input line to the
//! shell on top; handlers report where control goes next through a
//! `Transition` instead of calling into other shells.

use std::time::Duration;

use coal_audio::{Cue, Notifier, Playback};
use coal_content::{ContentKey, ContentProvider};
use coal_platform::{GameLauncher, TimeService};
use coal_types::config::{AuthPolicy, DispatchMode};
use coal_types::error::{CoalError, Result};

use crate::console::{Console, end_of_input};
use crate::narrative::{NarrativeContext, Sequencer};
use crate::script::Script;
use crate::vault::{Device, DeviceId, Vault};

// ---------------------------------------------------------------------------
// Identity and transitions
// ---------------------------------------------------------------------------

/// Which shell is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellId {
    Root,
    SsCrack,
    FtPea,
    /// Logged in to a remote device.
    Device(DeviceId),
}

impl ShellId {
    /// Prompt shown when reading a command.
    pub fn prompt(&self) -> String {
        match self {
            Self::Root => "root > ".to_string(),
            Self::SsCrack => "root ~ SScrack > ".to_string(),
            Self::FtPea => "root ~ FTpea > ".to_string(),
            Self::Device(id) => format!("root ~ {} > ", id.ip()),
        }
    }
}

impl std::fmt::Display for ShellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::SsCrack => write!(f, "SScrack"),
            Self::FtPea => write!(f, "FTpea"),
            Self::Device(id) => write!(f, "device {id}"),
        }
    }
}

/// Where control goes after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Read the next line in the same shell.
    Stay,
    /// Push a child shell.
    Enter(ShellId),
    /// Pop back to the parent shell.
    Leave,
    /// Re-run the boot sequence and start over at the root.
    Restart,
    /// End the session.
    Exit,
}

impl Transition {
    /// Transitions that end the current shell's read loop, so its fallback
    /// never runs after them.
    pub fn short_circuits(&self) -> bool {
        matches!(self, Self::Leave | Self::Exit)
    }
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Services and state passed to every command.
pub struct Environment<'a> {
    pub console: &'a mut dyn Console,
    pub content: &'a dyn ContentProvider,
    pub notifier: &'a dyn Notifier,
    pub time: &'a dyn TimeService,
    pub launcher: &'a dyn GameLauncher,
    pub vault: &'a Vault,
    pub policy: AuthPolicy,
    /// Command line for the arcade game.
    pub snake: &'a [String],
    /// The shell running the command.
    pub shell: ShellId,
}

impl Environment<'_> {
    /// Print a line.
    pub fn say(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.console.write_line("")
    }

    /// Print a text resource verbatim.
    pub fn render(&mut self, key: ContentKey) -> Result<()> {
        let text = self.content.load(key)?;
        for line in text.lines() {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    /// Prompt for a field value. Only the line ending is stripped.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.console.read_line(prompt)?.ok_or_else(end_of_input)
    }

    pub fn pause_ms(&mut self, ms: u64) {
        self.console.pause(Duration::from_millis(ms));
    }

    pub fn clear(&mut self) -> Result<()> {
        self.console.clear()
    }

    pub fn cue(&self, cue: Cue, playback: Playback) {
        self.notifier.notify(cue, playback);
    }

    /// Play a narrative.
    pub fn narrate(&mut self, script: &Script, ctx: &NarrativeContext) -> Result<()> {
        Sequencer::new(&mut *self.console, self.content, self.notifier).run(script, ctx)
    }

    /// The device this shell is logged in to.
    pub fn device(&self) -> Result<&'static Device> {
        let ShellId::Device(id) = self.shell else {
            return Err(CoalError::Shell(format!(
                "{} is not connected to a device",
                self.shell
            )));
        };
        let vault: &Vault = self.vault;
        vault
            .device(id)
            .ok_or_else(|| CoalError::Shell(format!("unknown device {id}")))
    }

    /// The invalid-command response: message, error cue, idle loop.
    pub fn invalid_command(&mut self, message: &str) -> Result<()> {
        self.blank()?;
        self.say(message)?;
        self.blank()?;
        self.cue(Cue::Error, Playback::Blocking);
        self.cue(Cue::Idle, Playback::Loop);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A single shell command.
pub trait Command {
    /// The command name (what the user types, lower case).
    fn name(&self) -> &str;

    /// Whether a match suppresses the shell's fallback under legacy
    /// dispatch.
    fn claims_fallback(&self) -> bool {
        false
    }

    /// Run the command.
    fn execute(&self, env: &mut Environment<'_>) -> Result<Transition>;
}

/// Normalize an input line for matching: trim and ASCII lower case.
pub fn normalize(line: &str) -> String {
    line.trim().to_ascii_lowercase()
}

/// An ordered command table with its fallback message.
pub struct Shell {
    commands: Vec<Box<dyn Command>>,
    fallback: &'static str,
}

impl Shell {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            commands: Vec::new(),
            fallback,
        }
    }

    /// Append a command. Order matters: rules run in table order.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.push(cmd);
    }

    /// Registered command names in table order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// The invalid-command message.
    pub fn fallback_message(&self) -> &'static str {
        self.fallback
    }

    /// Whether `line` names a command of this shell.
    pub fn recognizes(&self, line: &str) -> bool {
        let name = normalize(line);
        self.commands.iter().any(|c| c.name() == name)
    }

    /// Run one input line.
    ///
    /// Rules run in order. A short-circuiting transition returns at once.
    /// Otherwise the fallback runs afterwards when nothing matched, and
    /// under `DispatchMode::Legacy` also when the matched rule does not
    /// claim it.
    pub fn dispatch(
        &self,
        line: &str,
        env: &mut Environment<'_>,
        mode: DispatchMode,
    ) -> Result<Transition> {
        let name = normalize(line);
        log::debug!("{} <- {name:?}", env.shell);

        let mut outcome = Transition::Stay;
        let mut matched = false;
        let mut claimed = false;
        for cmd in self.commands.iter().filter(|c| c.name() == name) {
            matched = true;
            let transition = cmd.execute(env)?;
            if transition.short_circuits() {
                return Ok(transition);
            }
            claimed |= cmd.claims_fallback();
            outcome = transition;
        }

        let run_fallback = match mode {
            DispatchMode::Legacy => !claimed,
            DispatchMode::Exclusive => !matched,
        };
        if run_fallback {
            env.invalid_command(self.fallback)?;
        }
        Ok(outcome)
    }
}
