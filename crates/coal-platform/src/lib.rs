//! Platform services used by the CoalOS shells.

pub mod services;

pub use services::{DesktopPlatform, GameLauncher, ProcessLauncher, SystemTime, TimeService};

#[cfg(any(test, feature = "testing"))]
pub use services::FixedClock;
