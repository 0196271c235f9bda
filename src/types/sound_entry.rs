use std::path::{Path, PathBuf};

/// Extensions (lowercase, without the dot) the soundboard will list.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "wav"];

/// One playable file found in the sound folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    pub display_name: String,
    pub path: PathBuf,
}

impl SoundEntry {
    /// Builds an entry if `path` has a supported extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        if !is_supported(path) {
            return None;
        }
        let display_name = path.file_stem()?.to_string_lossy().to_string();
        Some(SoundEntry {
            display_name,
            path: path.to_path_buf(),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Matches on the lowercased file name suffix, so a bare `.mp3` counts too.
pub fn is_supported(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| name.strip_suffix(*ext).is_some_and(|rest| rest.ends_with('.')))
}
