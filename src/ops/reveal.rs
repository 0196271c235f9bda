use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

/// Program that opens a folder in the desktop file manager.
pub fn file_manager_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Opens `dir` in the file manager without blocking the UI.
pub fn reveal_folder(dir: &Path) -> io::Result<()> {
    launch_detached(file_manager_program(), dir).map(|_| ())
}

/// Spawns `program dir` and reaps it on a helper thread once it exits.
pub fn launch_detached(
    program: &str,
    dir: &Path,
) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    tracing::info!("opening {} with {program}", dir.display());
    let mut child = Command::new(program).arg(dir).spawn()?;
    let program = program.to_string();
    Ok(thread::spawn(move || {
        let status = child.wait()?;
        if !status.success() {
            tracing::warn!("{program} exited with {status}");
        }
        Ok(status)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn launched_program_is_waited_on() {
        let dir = tempdir().unwrap();

        let waiter = launch_detached("true", dir.path()).unwrap();

        let status = waiter.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn unknown_program_is_a_spawn_error() {
        let dir = tempdir().unwrap();
        assert!(launch_detached("no-such-file-manager-xyz", dir.path()).is_err());
    }
}
