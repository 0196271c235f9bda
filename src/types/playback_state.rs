use crate::types::sound_entry::SoundEntry;

/// What the single output channel is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing { entry: SoundEntry },
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing { .. })
    }

    pub fn current(&self) -> Option<&SoundEntry> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing { entry } => Some(entry),
        }
    }
}
