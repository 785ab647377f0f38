//! Manifest file I/O with size caps and atomic writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use acp_manifest::AgentManifest;

use crate::{Error, Result};

/// Maximum accepted manifest file size in bytes.
///
/// Agent manifests are small declarative documents; anything larger is
/// almost certainly not one.
pub const MAX_MANIFEST_SIZE: u64 = 1024 * 1024;

/// Load and validate an agent manifest from disk.
///
/// The file must exist, weigh in under [`MAX_MANIFEST_SIZE`], and hold a
/// valid manifest document (see [`AgentManifest::from_json`]).
pub fn load_manifest(path: impl AsRef<Path>) -> Result<AgentManifest> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::ManifestNotFound(path.to_path_buf()));
    }

    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if metadata.len() > MAX_MANIFEST_SIZE {
        return Err(Error::ManifestTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_MANIFEST_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let manifest = AgentManifest::from_json(&content)?;

    tracing::debug!(
        path = %path.display(),
        agent = %manifest.name,
        "loaded agent manifest"
    );

    Ok(manifest)
}

/// Serialize a manifest and write it to disk atomically.
///
/// Uses write-to-temp-then-rename to prevent partial writes, with an
/// advisory lock on the temp file to keep concurrent writers out.
pub fn write_manifest(path: impl AsRef<Path>, manifest: &AgentManifest) -> Result<()> {
    let path = path.as_ref();
    let mut content = manifest.to_json()?;
    content.push('\n');
    write_atomic(path, content.as_bytes())
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    // Temp file in the same directory, so the rename never crosses filesystems
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    // Release lock (implicit on drop, but be explicit)
    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}
