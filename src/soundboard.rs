use std::path::{Path, PathBuf};

use crate::audio::AudioEngine;
use crate::error::{PlaybackError, SoundboardError};
use crate::ops::reveal::reveal_folder;
use crate::ops::scan::scan_sound_dir;
use crate::types::notice::Notice;
use crate::types::playback_state::PlaybackState;
use crate::types::sound_entry::SoundEntry;
use crate::types::volume::Volume;

/// Something the user asked for. Sound buttons carry only their list index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Play(usize),
    Stop,
    Refresh,
    SetVolume(f32),
    OpenFolder,
}

/// Owns the sound list, the playback state and the audio engine.
pub struct Soundboard {
    engine: Box<dyn AudioEngine>,
    sound_dir: PathBuf,
    entries: Vec<SoundEntry>,
    state: PlaybackState,
    volume: Volume,
}

impl Soundboard {
    pub fn new(mut engine: Box<dyn AudioEngine>, sound_dir: PathBuf, volume: Volume) -> Self {
        engine.set_volume(volume.level());
        Soundboard {
            engine,
            sound_dir,
            entries: Vec::new(),
            state: PlaybackState::Idle,
            volume,
        }
    }

    pub fn entries(&self) -> &[SoundEntry] {
        &self.entries
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Runs `action`, turning any failure into a notice for the user.
    pub fn dispatch(&mut self, action: Action) -> Option<Notice> {
        let result = match action {
            Action::Play(index) => self.play_index(index).map(|_| None),
            Action::Stop => {
                self.stop();
                Ok(None)
            }
            Action::Refresh => self.refresh().map(|_| None),
            Action::SetVolume(level) => self.set_volume(level).map(|_| None),
            Action::OpenFolder => Ok(self.open_folder()),
        };
        match result {
            Ok(notice) => notice,
            Err(err) => {
                tracing::warn!("{action:?} failed: {err}");
                Some(Notice::from(&err))
            }
        }
    }

    /// Rebuilds the sound list from the folder. Playback is left alone.
    pub fn refresh(&mut self) -> Result<usize, SoundboardError> {
        self.entries.clear();
        self.entries = scan_sound_dir(&self.sound_dir)?;
        Ok(self.entries.len())
    }

    pub fn play_index(&mut self, index: usize) -> Result<(), SoundboardError> {
        let entry = self
            .entries
            .get(index)
            .cloned()
            .ok_or(PlaybackError::UnknownEntry(index))?;
        self.play(entry)
    }

    /// Starts `entry`, replacing whatever is playing.
    ///
    /// The file is loaded first; on failure the current state is untouched.
    pub fn play(&mut self, entry: SoundEntry) -> Result<(), SoundboardError> {
        self.engine.load(&entry.path)?;
        self.engine.stop();
        self.engine.play();
        tracing::info!("playing {}", entry.file_name());
        self.state = PlaybackState::Playing { entry };
        Ok(())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        if self.state.is_playing() {
            tracing::info!("playback stopped");
        }
        self.state = PlaybackState::Idle;
    }

    /// Applies `level` (clamped to `[0.0, 1.0]`) and returns the level in use.
    pub fn set_volume(&mut self, level: f32) -> Result<f32, SoundboardError> {
        self.volume = Volume::new(level)?;
        self.engine.set_volume(self.volume.level());
        tracing::debug!("volume set to {:.2}", self.volume.level());
        Ok(self.volume.level())
    }

    /// Notices a sound that ended on its own. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        if self.state.is_playing() && !self.engine.is_busy() {
            tracing::debug!("playback finished");
            self.state = PlaybackState::Idle;
            return true;
        }
        false
    }

    fn open_folder(&self) -> Option<Notice> {
        match reveal_folder(&self.sound_dir) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!("cannot open file manager: {err}");
                Some(Notice::info("Path", self.sound_dir.display().to_string()))
            }
        }
    }
}
