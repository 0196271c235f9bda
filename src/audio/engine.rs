use std::path::Path;

use crate::error::PlaybackError;

/// A single music channel: at most one loaded sound is audible at a time.
pub trait AudioEngine {
    /// Opens and decodes `path` without disturbing what is currently playing.
    fn load(&mut self, path: &Path) -> Result<(), PlaybackError>;

    /// Starts the last loaded sound. Callers stop the current one first.
    fn play(&mut self);

    fn stop(&mut self);

    fn set_volume(&mut self, level: f32);

    /// True while the current sound still has samples to output.
    fn is_busy(&self) -> bool;
}

/// Checks that `path` names a regular file before handing it to a decoder.
pub fn ensure_playable_file(path: &Path) -> Result<(), PlaybackError> {
    if path.is_file() {
        Ok(())
    } else if path.exists() {
        Err(PlaybackError::NotAFile(path.to_path_buf()))
    } else {
        Err(PlaybackError::NotFound(path.to_path_buf()))
    }
}

/// Engine used when no output device could be opened. Nothing ever plays.
#[derive(Debug, Default)]
pub struct SilentEngine;

impl AudioEngine for SilentEngine {
    fn load(&mut self, _path: &Path) -> Result<(), PlaybackError> {
        Err(PlaybackError::EngineUnavailable)
    }

    fn play(&mut self) {}

    fn stop(&mut self) {}

    fn set_volume(&mut self, _level: f32) {}

    fn is_busy(&self) -> bool {
        false
    }
}
