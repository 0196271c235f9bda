use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoundboardError {
    #[error("sound folder {} is not accessible: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error("volume {0} is not a valid level")]
    Validation(f32),
    #[error("audio engine failed to start: {0}")]
    AudioEngineInit(#[source] rodio::StreamError),
}

impl SoundboardError {
    /// Dialog title for this kind of failure.
    pub fn title(&self) -> &'static str {
        match self {
            SoundboardError::Filesystem { .. } => "Folder Error",
            SoundboardError::Playback(_) => "Playback Error",
            SoundboardError::Validation(_) => "Volume Error",
            SoundboardError::AudioEngineInit(_) => "Audio Error",
        }
    }
}

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {}: {source}", .path.display())]
    Unsupported {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("no output channel: {0}")]
    Output(#[from] rodio::PlayError),
    #[error("no sound at position {0}")]
    UnknownEntry(usize),
    #[error("audio engine is unavailable")]
    EngineUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_errors_are_titled_as_playback() {
        let err: SoundboardError = PlaybackError::NotFound(PathBuf::from("gone.wav")).into();
        assert_eq!(err.title(), "Playback Error");
        assert_eq!(err.to_string(), "gone.wav does not exist");
    }

    #[test]
    fn filesystem_error_names_the_folder() {
        let err = SoundboardError::Filesystem {
            path: PathBuf::from("sounds"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.title(), "Folder Error");
        assert!(err.to_string().starts_with("sound folder sounds is not accessible"));
    }
}
