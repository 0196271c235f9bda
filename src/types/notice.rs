use crate::error::SoundboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Info,
}

/// A dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&SoundboardError> for Notice {
    fn from(err: &SoundboardError) -> Self {
        Notice {
            level: NoticeLevel::Error,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}
