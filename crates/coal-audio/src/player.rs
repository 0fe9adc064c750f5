//! Cue playback through a single output channel.
//!
//! `SoundNotifier` maps each cue to its file under the sound directory and
//! drives a `CueOutput`. Every cue stops whatever is playing before it
//! starts, so a running loop never overlaps the next cue.

use std::path::{Path, PathBuf};

use coal_types::error::Result;

use crate::{Cue, Notifier, Playback};

/// One audible channel.
pub trait CueOutput {
    /// Silence the current sound, if any.
    fn stop(&self);

    /// Start the file at `path`, repeating it until stopped when `looping`.
    fn play(&self, path: &Path, looping: bool) -> Result<()>;

    /// Block until the current sound has finished.
    fn wait(&self);
}

/// Notifier that plays cue files from a sound directory.
pub struct SoundNotifier<O> {
    output: O,
    sound_dir: PathBuf,
}

impl<O: CueOutput> SoundNotifier<O> {
    pub fn new(output: O, sound_dir: impl Into<PathBuf>) -> Self {
        Self {
            output,
            sound_dir: sound_dir.into(),
        }
    }

    fn cue_path(&self, cue: Cue) -> PathBuf {
        self.sound_dir.join(cue.file_name())
    }
}

impl<O: CueOutput> Notifier for SoundNotifier<O> {
    fn notify(&self, cue: Cue, playback: Playback) {
        let path = self.cue_path(cue);
        log::debug!("cue {cue} ({playback:?}) -> {}", path.display());
        self.output.stop();
        if let Err(e) = self.output.play(&path, playback == Playback::Loop) {
            log::warn!("Audio: {e}");
            return;
        }
        if playback == Playback::Blocking {
            self.output.wait();
        }
    }
}
