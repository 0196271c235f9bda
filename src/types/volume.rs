use crate::error::SoundboardError;

/// Output level in `[0.0, 1.0]`.
///
/// Finite inputs outside the range are clamped. NaN and infinities are
/// rejected, since they carry no usable level.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Volume {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 1.0;

    pub fn new(level: f32) -> Result<Self, SoundboardError> {
        if !level.is_finite() {
            return Err(SoundboardError::Validation(level));
        }
        Ok(Volume(level.clamp(Self::MIN, Self::MAX)))
    }

    pub fn level(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(Self::MAX)
    }
}
