//! The CoalOS terminal: nested shells, credential vault and scripted
//! narratives.
//!
//! A `Session` boots the machine, then drives a stack of shells from one
//! loop. Each shell is an ordered table of `Command`s. Cracking tools check
//! attempts against the `Vault` and play `Script`s through the narrative
//! `Sequencer`, which paces output with the `ProgressBar`.

pub mod boot;
pub mod console;
pub mod crack_commands;
pub mod device_commands;
pub mod narrative;
mod pacer;
pub mod root_commands;
pub mod script;
mod session;
mod shell;
pub mod vault;

#[cfg(test)]
pub(crate) mod testing;

/// Line-oriented terminal abstraction.
pub use console::{Console, StdConsole};
/// Register the SScrack and FTpea commands into a shell.
pub use crack_commands::{register_ftpea_commands, register_sscrack_commands};
/// Register the remote device commands into a shell.
pub use device_commands::register_device_commands;
/// Plays scripts with interpolated values.
pub use narrative::{NarrativeContext, Sequencer};
/// Fixed-width progress bar driven one step at a time.
pub use pacer::ProgressBar;
/// Register the root shell commands into a shell.
pub use root_commands::register_root_commands;
/// A narrative: beats plus an optional reveal line.
pub use script::{Beat, Script};
/// The interactive session and how it ended.
pub use session::{Session, SessionEnd};
/// A single shell command.
pub use shell::Command;
/// Services passed to every command.
pub use shell::Environment;
/// An ordered command table with its fallback.
pub use shell::Shell;
/// Shell identity and the transitions between shells.
pub use shell::{ShellId, Transition};
/// Read-only credential store.
pub use vault::{Attempt, AuthError, Vault};
