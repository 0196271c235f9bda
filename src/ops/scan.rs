use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::SoundboardError;
use crate::types::sound_entry::SoundEntry;

/// Lists the playable files directly inside `dir`, sorted by file name.
///
/// The folder is created when missing. An empty folder yields an empty list.
pub fn scan_sound_dir(dir: &Path) -> Result<Vec<SoundEntry>, SoundboardError> {
    let fs_error = |source: std::io::Error| SoundboardError::Filesystem {
        path: dir.to_path_buf(),
        source,
    };

    if !dir.is_dir() {
        tracing::info!("creating sound folder {}", dir.display());
        fs::create_dir_all(dir).map_err(fs_error)?;
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let item = match item {
            Ok(item) => item,
            Err(err) if err.depth() == 0 => return Err(fs_error(err.into())),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = item.path();
        if !path.is_file() {
            continue;
        }
        if let Some(entry) = SoundEntry::from_path(path) {
            tracing::debug!("found sound {}", entry.file_name());
            entries.push(entry);
        }
    }

    tracing::info!("{} sound(s) in {}", entries.len(), dir.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn names(entries: &[SoundEntry]) -> Vec<String> {
        entries.iter().map(SoundEntry::file_name).collect()
    }

    #[test]
    fn empty_folder_yields_no_entries() {
        let dir = tempdir().unwrap();
        assert!(scan_sound_dir(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_folder_is_created() {
        let root = tempdir().unwrap();
        let sounds = root.path().join("sounds");

        let entries = scan_sound_dir(&sounds).unwrap();

        assert!(entries.is_empty());
        assert!(sounds.is_dir());
    }

    #[test]
    fn keeps_only_supported_files_sorted_by_name() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b.wav");
        touch(dir.path(), "A.mp3");
        touch(dir.path(), "a.txt");

        let entries = scan_sound_dir(dir.path()).unwrap();

        assert_eq!(names(&entries), vec!["A.mp3", "b.wav"]);
        assert_eq!(entries[0].display_name, "A");
        assert_eq!(entries[0].path, dir.path().join("A.mp3"));
    }

    #[test]
    fn uppercase_extensions_are_listed() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "horn.MP3");
        touch(dir.path(), "drum.Wav");

        let entries = scan_sound_dir(dir.path()).unwrap();

        assert_eq!(names(&entries), vec!["drum.Wav", "horn.MP3"]);
    }

    #[test]
    fn dot_only_file_names_are_listed() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".mp3");
        touch(dir.path(), "x.wav");

        let entries = scan_sound_dir(dir.path()).unwrap();

        assert_eq!(names(&entries), vec![".mp3", "x.wav"]);
        assert_eq!(entries[0].display_name, ".mp3");
    }

    #[test]
    fn subfolders_are_not_listed_or_descended() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.wav")).unwrap();
        fs::create_dir(dir.path().join("more")).unwrap();
        touch(&dir.path().join("more"), "deep.mp3");
        touch(dir.path(), "top.mp3");

        let entries = scan_sound_dir(dir.path()).unwrap();

        assert_eq!(names(&entries), vec!["top.mp3"]);
    }

    #[test]
    fn path_occupied_by_a_file_is_a_filesystem_error() {
        let root = tempdir().unwrap();
        let blocker = root.path().join("sounds");
        fs::write(&blocker, b"not a folder").unwrap();

        let result = scan_sound_dir(&blocker);

        assert!(matches!(result, Err(SoundboardError::Filesystem { .. })));
    }
}
