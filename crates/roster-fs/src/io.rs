//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes.
/// The temp file lives next to the target so the rename never crosses
/// filesystems. Readers observe either the previous content or the new
/// content, never a truncated file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    // Any failure once the temp file may exist removes it again.
    let result = write_locked(&temp_path, path, content)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| Error::io(path, e)));
    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write complete");
    Ok(())
}

/// Create `temp_path`, lock it and fill it with `content`, synced to disk.
/// The lock is released before returning so the file can be renamed.
fn write_locked(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;

    // Lock is released on drop as well; unlock before rename for Windows.
    let _ = fs2::FileExt::unlock(&temp_file);
    Ok(())
}

/// Name of the sibling temp file used by [`write_atomic`]: `.{name}.{pid}.tmp`.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content, treating a missing file as `None`.
///
/// Any other failure (permissions, invalid UTF-8, path is a directory)
/// is still an error.
pub fn read_text_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Append a single line to a file, creating it if needed.
///
/// A trailing newline is added. If the existing content does not end with
/// one, a newline is written first so the new line never joins the last
/// one. The file is opened in append mode and exclusively locked for the
/// duration of the write, so existing content is never truncated or
/// reordered.
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let unterminated = ends_without_newline(&mut file).map_err(|e| Error::io(path, e))?;

    let mut buf = String::with_capacity(line.len() + 2);
    if unterminated {
        buf.push('\n');
    }
    buf.push_str(line);
    buf.push('\n');

    file.write_all(buf.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Whether a non-empty file's last byte is something other than `\n`.
fn ends_without_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
