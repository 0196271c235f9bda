use std::path::{Path, PathBuf};

pub const SOUND_DIR_NAME: &str = "sounds";

/// Compiled-in application settings. Nothing here is read from disk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub sound_dir: PathBuf,
    pub default_volume: f32,
    pub window_size: [f32; 2],
}

impl AppConfig {
    /// Settings for this install: the sound folder lives beside the executable.
    pub fn resolve() -> Self {
        let install_dir = match std::env::current_exe() {
            Ok(exe) => exe.parent().map(Path::to_path_buf).unwrap_or_default(),
            Err(err) => {
                tracing::warn!("cannot locate executable, using working directory: {err}");
                PathBuf::new()
            }
        };
        Self::for_install_dir(&install_dir)
    }

    pub fn for_install_dir(install_dir: &Path) -> Self {
        AppConfig {
            app_name: "CF-Soundboard".to_string(),
            sound_dir: install_dir.join(SOUND_DIR_NAME),
            default_volume: 0.8,
            window_size: [420.0, 560.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sound_dir_is_next_to_install_dir() {
        let config = AppConfig::for_install_dir(Path::new("/opt/soundboard"));
        assert_eq!(config.sound_dir, PathBuf::from("/opt/soundboard/sounds"));
        assert_eq!(config.default_volume, 0.8);
    }

    #[test]
    fn unknown_install_dir_falls_back_to_relative_sounds() {
        let config = AppConfig::for_install_dir(Path::new(""));
        assert_eq!(config.sound_dir, PathBuf::from("sounds"));
    }
}
