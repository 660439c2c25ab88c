//! Temp-file-and-rename writes for the student mirror.
//!
//! The replacement file is written and synced under a hidden name in the
//! target's directory, then renamed over the target, so readers observe
//! either the old snapshot or the new one.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::StudentRepositoryError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
pub(super) fn write_atomic(
    dir: &Dir,
    file_name: &str,
    contents: &str,
) -> Result<(), StudentRepositoryError> {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{nanos}.{counter}",
        std::process::id()
    );

    write_temp(dir, &tmp_name, contents).map_err(|err| {
        discard(dir, &tmp_name);
        StudentRepositoryError::mirror(format!("writing {tmp_name}: {err}"))
    })?;
    replace(dir, &tmp_name, file_name).map_err(|err| {
        discard(dir, &tmp_name);
        StudentRepositoryError::mirror(format!("replacing {file_name}: {err}"))
    })?;
    if let Err(err) = dir.open(".").and_then(|parent| parent.sync_all()) {
        tracing::debug!(error = %err, "mirror directory sync skipped");
    }
    Ok(())
}

fn write_temp(dir: &Dir, tmp_name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard(dir: &Dir, tmp_name: &str) {
    match dir.remove_file(tmp_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(file = tmp_name, error = %err, "failed to remove mirror temp file");
        }
    }
}
