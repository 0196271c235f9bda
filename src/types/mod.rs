pub mod notice;
pub mod playback_state;
pub mod sound_entry;
pub mod volume;
