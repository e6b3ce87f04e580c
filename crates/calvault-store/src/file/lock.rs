//! Advisory per-file locking through a sidecar `<file>.lock`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use calvault_core::constants::LOCK_EXTENSION;
use fs2::FileExt;

use crate::error::StoreResult;

/// Returns the sidecar lock path for `file`, e.g. `abc.ics` -> `abc.ics.lock`.
#[must_use]
pub fn lock_path(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_os_string();
    name.push(".");
    name.push(LOCK_EXTENSION);
    PathBuf::from(name)
}

/// ## Summary
/// Runs `f` while holding an exclusive advisory lock for `file`.
///
/// The lock file is created when missing and left in place afterwards. The
/// lock is released whether or not `f` succeeds.
///
/// ## Errors
/// Returns an error if the lock cannot be acquired or released, or whatever
/// `f` returns.
pub fn with_lock<T, F>(file: &Path, f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T>,
{
    let (_, lock) = acquire(file)?;

    let result = f();
    FileExt::unlock(&lock)?;
    result
}

/// ## Summary
/// Like [`with_lock`], but removes the lock file once `f` succeeds, before
/// the lock is released.
///
/// Used when `f` deletes `file`, so no sidecar outlives its object. A waiter
/// that was blocked on the removed lock file notices it is stale and locks a
/// fresh one instead. Off unix the lock file is kept, since a stale lock file
/// cannot be told apart from the linked one there.
///
/// ## Errors
/// Returns an error if the lock cannot be acquired or released, if the lock
/// file cannot be removed, or whatever `f` returns.
pub fn with_lock_then_remove<T, F>(file: &Path, f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T>,
{
    let (lock_path, lock) = acquire(file)?;

    let result = f();
    if result.is_ok() && cfg!(unix) {
        match fs::remove_file(&lock_path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                FileExt::unlock(&lock)?;
                return Err(e.into());
            }
        }
    }
    FileExt::unlock(&lock)?;
    result
}

/// Opens and exclusively locks the sidecar for `file`, retrying when the
/// locked file was unlinked while this caller waited for it.
fn acquire(file: &Path) -> StoreResult<(PathBuf, File)> {
    let lock_path = lock_path(file);
    loop {
        let lock = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        FileExt::lock_exclusive(&lock)?;
        if is_current(&lock, &lock_path)? {
            tracing::trace!(lock = %lock_path.display(), "Acquired object lock");
            return Ok((lock_path, lock));
        }

        tracing::trace!(lock = %lock_path.display(), "Lock file was removed while waiting; retrying");
        FileExt::unlock(&lock)?;
    }
}

/// Whether `lock` is still the file linked at `path`.
#[cfg(unix)]
fn is_current(lock: &File, path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let held = lock.metadata()?;
    match fs::metadata(path) {
        Ok(linked) => Ok(held.dev() == linked.dev() && held.ino() == linked.ino()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Lock files are never removed off unix, so a held one is always current.
#[cfg(not(unix))]
#[expect(clippy::unnecessary_wraps, reason = "matches the unix signature")]
fn is_current(_lock: &File, _path: &Path) -> io::Result<bool> {
    Ok(true)
}
