//! Platform service traits and desktop implementation.

use std::process::Command;

use chrono::{Datelike, Local, Timelike};

use coal_types::error::{CoalError, Result};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Breakdown of a calendar date and time of day.
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            year: u16::try_from(dt.year()).unwrap_or(0),
            month: dt.month() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }

    /// The `cal` rendering: `D M YYYY / H : M`, no zero padding.
    pub fn calendar(&self) -> String {
        format!(
            "{} {} {} / {} : {}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

/// Time service frozen at one instant.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

#[cfg(any(test, feature = "testing"))]
impl TimeService for FixedClock {
    fn now(&self) -> Result<SystemTime> {
        Ok(self.0)
    }
}

// ---------------------------------------------------------------------------
// Game launcher
// ---------------------------------------------------------------------------

/// Runs an external program in the foreground.
pub trait GameLauncher {
    /// Run `command` (program followed by arguments) and block until it
    /// exits. Returns the exit code, or -1 when killed by a signal.
    fn launch(&self, command: &[String]) -> Result<i32>;
}

/// Launcher backed by `std::process::Command`, inheriting the terminal.
#[derive(Debug, Default)]
pub struct ProcessLauncher;

impl GameLauncher for ProcessLauncher {
    fn launch(&self, command: &[String]) -> Result<i32> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| CoalError::Launch("no game command configured".to_string()))?;
        log::info!("Launching {program}");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| CoalError::Launch(format!("cannot run {program}: {e}")))?;
        Ok(status.code().unwrap_or(-1))
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Desktop platform: the local wall clock.
#[derive(Debug, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        Ok(SystemTime::from_datetime(&Local::now()))
    }
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
