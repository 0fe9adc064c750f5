//! Cue output on the default audio device.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use coal_types::error::{CoalError, Result};

use crate::player::{CueOutput, SoundNotifier};

/// Sound notifier on the default output device.
pub type RodioNotifier = SoundNotifier<RodioOutput>;

impl RodioNotifier {
    /// Open the default device and play cues from `sound_dir`.
    pub fn open(sound_dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self::new(RodioOutput::open()?, sound_dir))
    }
}

/// A rodio stream with at most one sink playing.
pub struct RodioOutput {
    // Dropping the stream silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: RefCell<Option<Sink>>,
}

impl RodioOutput {
    pub fn open() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| CoalError::Audio(format!("no output device: {e}")))?;
        log::info!("Audio: default output device opened");
        Ok(Self {
            _stream: stream,
            handle,
            sink: RefCell::new(None),
        })
    }
}

impl CueOutput for RodioOutput {
    fn stop(&self) {
        if let Some(sink) = self.sink.borrow_mut().take() {
            sink.stop();
        }
    }

    fn play(&self, path: &Path, looping: bool) -> Result<()> {
        let file = File::open(path)
            .map_err(|e| CoalError::Audio(format!("{}: {e}", path.display())))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| CoalError::Audio(format!("{}: {e}", path.display())))?;
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| CoalError::Audio(format!("cannot open sink: {e}")))?;
        if looping {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        *self.sink.borrow_mut() = Some(sink);
        Ok(())
    }

    fn wait(&self) {
        if let Some(sink) = self.sink.borrow().as_ref() {
            sink.sleep_until_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Build hosts often have no sound card; only check what a device allows.
    #[test]
    fn missing_file_is_audio_error() {
        let Ok(output) = RodioOutput::open() else {
            return;
        };
        let err = output
            .play(Path::new("/nonexistent/coal/idle.wav"), true)
            .unwrap_err();
        assert!(matches!(err, CoalError::Audio(_)));
        output.stop();
        output.wait();
    }

    #[test]
    fn undecodable_file_is_audio_error() {
        let Ok(output) = RodioOutput::open() else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("error.wav");
        std::fs::write(&path, b"not a wave file").unwrap();
        let err = output.play(&path, false).unwrap_err();
        assert!(format!("{err}").contains("error.wav"));
    }
}
