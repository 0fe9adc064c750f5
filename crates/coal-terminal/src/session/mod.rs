//! The interactive session: boot, then a single loop over a stack of shells.
//!
//! Each iteration reads one line at the prompt of the shell on top of the
//! stack, dispatches it, and applies the resulting `Transition`. Faults that
//! escape a command are reported and drop the player back at the root shell;
//! console I/O failures end the session.

use coal_audio::Notifier;
use coal_content::ContentProvider;
use coal_platform::{GameLauncher, TimeService};
use coal_types::config::{AuthPolicy, CoalConfig, DispatchMode, GamesConfig};
use coal_types::error::{CoalError, Result};

use crate::boot;
use crate::console::{Console, is_end_of_input};
use crate::crack_commands::{ftpea_shell, sscrack_shell};
use crate::device_commands::device_shell;
use crate::narrative::Sequencer;
use crate::root_commands::root_shell;
use crate::shell::{Environment, Shell, ShellId, Transition};
use crate::vault::Vault;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player confirmed `logout`.
    Logout,
    /// Input was closed.
    EndOfInput,
}

/// The four command tables.
struct Shells {
    root: Shell,
    sscrack: Shell,
    ftpea: Shell,
    device: Shell,
}

impl Shells {
    fn standard() -> Self {
        Self {
            root: root_shell(),
            sscrack: sscrack_shell(),
            ftpea: ftpea_shell(),
            device: device_shell(),
        }
    }

    fn get(&self, id: ShellId) -> &Shell {
        match id {
            ShellId::Root => &self.root,
            ShellId::SsCrack => &self.sscrack,
            ShellId::FtPea => &self.ftpea,
            ShellId::Device(_) => &self.device,
        }
    }
}

/// A running CoalOS session over borrowed services.
pub struct Session<'a> {
    console: &'a mut dyn Console,
    content: &'a dyn ContentProvider,
    notifier: &'a dyn Notifier,
    time: &'a dyn TimeService,
    launcher: &'a dyn GameLauncher,
    vault: Vault,
    policy: AuthPolicy,
    mode: DispatchMode,
    snake: Vec<String>,
    shells: Shells,
    stack: Vec<ShellId>,
    boot_on_start: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        content: &'a dyn ContentProvider,
        notifier: &'a dyn Notifier,
        time: &'a dyn TimeService,
        launcher: &'a dyn GameLauncher,
    ) -> Self {
        Self {
            console,
            content,
            notifier,
            time,
            launcher,
            vault: Vault::standard(),
            policy: AuthPolicy::default(),
            mode: DispatchMode::default(),
            snake: GamesConfig::default().snake,
            shells: Shells::standard(),
            stack: vec![ShellId::Root],
            boot_on_start: true,
        }
    }

    pub fn with_policy(mut self, policy: AuthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_dispatch(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Command line for the arcade game.
    pub fn with_snake(mut self, command: Vec<String>) -> Self {
        self.snake = command;
        self
    }

    /// Apply the auth, dispatch and games sections of `config`.
    pub fn configure(self, config: &CoalConfig) -> Self {
        self.with_policy(config.auth.policy)
            .with_dispatch(config.dispatch.mode)
            .with_snake(config.games.snake.clone())
    }

    /// Start at the root prompt without the boot sequence.
    pub fn skip_boot(mut self) -> Self {
        self.boot_on_start = false;
        self
    }

    /// The shell reading input.
    pub fn current(&self) -> ShellId {
        self.stack.last().copied().unwrap_or(ShellId::Root)
    }

    /// Shells entered, root first.
    pub fn stack(&self) -> &[ShellId] {
        &self.stack
    }

    /// Run until logout or end of input.
    pub fn run(&mut self) -> Result<SessionEnd> {
        log::info!(
            "Session started (policy {:?}, dispatch {:?})",
            self.policy,
            self.mode
        );
        if self.boot_on_start {
            self.boot()?;
        }
        self.reset();

        loop {
            let current = self.current();
            let Some(line) = self.console.read_line(&current.prompt())? else {
                log::info!("Input closed at {current}");
                return Ok(SessionEnd::EndOfInput);
            };

            match self.step(current, &line) {
                Ok(Transition::Stay) => {},
                Ok(Transition::Enter(child)) => {
                    log::info!("{current} -> {child}");
                    self.stack.push(child);
                },
                Ok(Transition::Leave) => {
                    if self.stack.len() > 1 {
                        self.stack.pop();
                    }
                    log::info!("{current} -> {}", self.current());
                },
                Ok(Transition::Restart) => {
                    log::info!("Restarting");
                    self.boot()?;
                    self.reset();
                },
                Ok(Transition::Exit) => {
                    log::info!("Logged out");
                    return Ok(SessionEnd::Logout);
                },
                Err(e) if is_end_of_input(&e) => {
                    log::info!("Input closed at {current}");
                    return Ok(SessionEnd::EndOfInput);
                },
                Err(e @ CoalError::Io(_)) => return Err(e),
                Err(e) => self.recover(current, &e)?,
            }
        }
    }

    fn step(&mut self, current: ShellId, line: &str) -> Result<Transition> {
        let shell = self.shells.get(current);
        let mut env = Environment {
            console: &mut *self.console,
            content: self.content,
            notifier: self.notifier,
            time: self.time,
            launcher: self.launcher,
            vault: &self.vault,
            policy: self.policy,
            snake: &self.snake,
            shell: current,
        };
        shell.dispatch(line, &mut env, self.mode)
    }

    fn boot(&mut self) -> Result<()> {
        boot::run(&mut Sequencer::new(
            &mut *self.console,
            self.content,
            self.notifier,
        ))
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(ShellId::Root);
    }

    fn recover(&mut self, at: ShellId, err: &CoalError) -> Result<()> {
        log::error!("Fault in {at}: {err}");
        self.console.write_line("")?;
        self.console
            .write_line(&format!("System fault: {err}. Returning to root..."))?;
        self.console.write_line("")?;
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests;
