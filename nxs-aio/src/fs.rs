/*
File: nxs-aio/src/fs.rs
Purpose: Local file placement for downloaded artifacts.
*/
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use nxs_common::error::{NxsError, Result};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, error, warn};

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        NxsError::from(e)
    })
}

/// Directory a file will be written into. A bare file name resolves to `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Creates a scratch file next to `final_path` (creating parent directories).
///
/// The scratch file is removed when dropped, so an aborted download never
/// leaves it behind; [`persist_scratch`] moves it into place instead.
pub fn scratch_file_for(final_path: &Path) -> Result<NamedTempFile> {
    let dir = parent_dir(final_path);
    create_dir_all(&dir)?;

    let prefix = format!(
        ".{}.",
        final_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    );
    let scratch = Builder::new()
        .prefix(&prefix)
        .suffix(".download")
        .tempfile_in(&dir)
        .map_err(|e| {
            NxsError::IoError(format!(
                "Failed to create scratch file in {}: {}",
                dir.display(),
                e
            ))
        })?;
    debug!("Created scratch file: {}", scratch.path().display());
    Ok(scratch)
}

/// Atomically replaces `final_path` with the scratch file, keeping the
/// permissions of a file that is being overwritten.
pub fn persist_scratch(scratch: NamedTempFile, final_path: &Path) -> Result<()> {
    let original_perms = fs::metadata(final_path).map(|m| m.permissions()).ok();
    let scratch_path = scratch.path().to_path_buf();

    scratch.as_file().sync_all()?;
    scratch.persist(final_path).map_err(|e| {
        error!(
            "Failed to persist scratch file {} over {}: {}",
            scratch_path.display(),
            final_path.display(),
            e.error
        );
        NxsError::Io(Arc::new(e.error))
    })?;

    if let Some(perms) = original_perms {
        if let Err(e) = fs::set_permissions(final_path, perms) {
            warn!(
                "Failed to restore original permissions on {}: {}",
                final_path.display(),
                e
            );
        }
    }
    debug!("Moved scratch file to final location: {}", final_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn scratch_file_is_removed_when_dropped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/out.bin");
        let scratch = scratch_file_for(&target).unwrap();
        let scratch_path = scratch.path().to_path_buf();
        assert!(scratch_path.starts_with(dir.path().join("nested")));
        assert!(scratch_path.exists());
        drop(scratch);
        assert!(!scratch_path.exists());
        assert!(!target.exists());
    }

    #[test]
    fn persist_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");
        fs::write(&target, b"old").unwrap();

        let mut scratch = scratch_file_for(&target).unwrap();
        scratch.write_all(b"new").unwrap();
        persist_scratch(scratch, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        assert_eq!(parent_dir(Path::new("file.jar")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("/tmp/x/file.jar")), PathBuf::from("/tmp/x"));
    }
}
