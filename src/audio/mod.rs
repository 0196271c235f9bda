// Playback goes through rodio; the controller only sees the AudioEngine trait.

pub mod engine;
pub mod rodio_engine;

pub use engine::{AudioEngine, SilentEngine};
pub use rodio_engine::RodioEngine;
