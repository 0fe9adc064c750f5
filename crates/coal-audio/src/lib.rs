//! Audio cues for CoalOS.
//!
//! Shells and narratives fire cues through the `Notifier` trait and never
//! observe a result: audio is a side effect, not a correctness dependency.
//! A missing file or a machine without an output device degrades to
//! silence.

#[cfg(feature = "rodio")]
mod output;
mod player;

#[cfg(feature = "rodio")]
pub use output::{RodioNotifier, RodioOutput};
pub use player::{CueOutput, SoundNotifier};

#[cfg(any(test, feature = "testing"))]
use std::cell::RefCell;

/// A named sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Invalid command.
    Error,
    /// Background hum between commands.
    Idle,
    /// Dial-up handshake on a remote login.
    Modem,
    /// Boot warm-up.
    Warmup,
    /// Jingle at the end of boot.
    Startup,
    /// Jingle on confirmed logout.
    Shutdown,
}

impl Cue {
    /// Stable identifier used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Idle => "idle",
            Self::Modem => "modem",
            Self::Warmup => "warmup",
            Self::Startup => "startup",
            Self::Shutdown => "shutdown",
        }
    }

    /// File name of the cue inside the sound directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Error => "error.wav",
            Self::Idle => "idle.wav",
            Self::Modem => "modem.wav",
            Self::Warmup => "warmup.wav",
            Self::Startup => "OldWindows(Start).wav",
            Self::Shutdown => "OldWindows(Shutdown).wav",
        }
    }
}

impl std::fmt::Display for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// How a cue is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Play to completion before returning.
    Blocking,
    /// Start playing and return immediately.
    Background,
    /// Repeat in the background until another cue is fired.
    Loop,
}

/// Fire-and-forget sound output.
///
/// Any cue stops a running `Loop` first: only one cue is audible at a time.
pub trait Notifier {
    fn notify(&self, cue: Cue, playback: Playback);
}

/// Notifier that only logs. Used when audio is disabled or no device opens.
#[derive(Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, cue: Cue, playback: Playback) {
        log::trace!("cue {cue} ({playback:?}) muted");
    }
}

/// Notifier that records every cue in order.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    cues: RefCell<Vec<(Cue, Playback)>>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue fired so far, oldest first.
    pub fn cues(&self) -> Vec<(Cue, Playback)> {
        self.cues.borrow().clone()
    }

    /// How many times `cue` was fired.
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.borrow().iter().filter(|(c, _)| *c == cue).count()
    }

    /// Forget recorded cues.
    pub fn clear(&self) {
        self.cues.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "testing"))]
impl Notifier for RecordingNotifier {
    fn notify(&self, cue: Cue, playback: Playback) {
        self.cues.borrow_mut().push((cue, playback));
    }
}
