use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::audio::engine::{AudioEngine, ensure_playable_file};
use crate::error::{PlaybackError, SoundboardError};

/// Plays through the default output device.
///
/// `load` builds a paused sink for the new file; `play` makes it the current
/// one. Both sinks share the stream's mixer.
pub struct RodioEngine {
    // Dropping the stream silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    current: Option<Sink>,
    pending: Option<Sink>,
    volume: f32,
}

impl RodioEngine {
    pub fn new() -> Result<Self, SoundboardError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(SoundboardError::AudioEngineInit)?;
        tracing::info!("audio output opened on default device");
        Ok(Self {
            _stream: stream,
            handle,
            current: None,
            pending: None,
            volume: 1.0,
        })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError> {
        ensure_playable_file(path)?;
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source =
            Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Unsupported {
                path: path.to_path_buf(),
                source,
            })?;

        let sink = Sink::try_new(&self.handle)?;
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(source);
        self.pending = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        let Some(next) = self.pending.take() else {
            return;
        };
        next.play();
        self.current = Some(next);
    }

    fn stop(&mut self) {
        if let Some(sink) = self.current.take() {
            sink.stop();
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Some(sink) = self.current.as_ref() {
            sink.set_volume(level);
        }
        if let Some(sink) = self.pending.as_ref() {
            sink.set_volume(level);
        }
    }

    fn is_busy(&self) -> bool {
        self.current
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }
}
