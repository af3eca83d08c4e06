//! Log file retention management
//!
//! Removes a namespace's period files once they are older than the retention
//! window. Files of other namespaces and non-log files are left alone.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};

/// Default retention period in days
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

/// Clean up `namespace` log files older than the default retention
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs(logs_dir: &Path, namespace: &str) -> Result<usize> {
    cleanup_old_logs_with_retention(logs_dir, namespace, DEFAULT_RETENTION_DAYS)
}

/// Clean up `namespace` log files older than the specified number of days
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs_with_retention(
    logs_dir: &Path,
    namespace: &str,
    retention_days: u64,
) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let retention_duration = Duration::from_secs(retention_days * 24 * 60 * 60);
    let cutoff = SystemTime::now()
        .checked_sub(retention_duration)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let prefix = format!("{}_", namespace);
    let mut deleted_count = 0;

    let entries = fs::read_dir(logs_dir)
        .with_context(|| format!("Failed to read log directory {}", logs_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.starts_with(&prefix) && name.ends_with(".log") => {}
            _ => continue,
        }

        if let Ok(metadata) = entry.metadata() {
            if !metadata.is_file() {
                continue;
            }
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff && fs::remove_file(&path).is_ok() {
                    tracing::debug!("Removed expired log file {}", path.display());
                    deleted_count += 1;
                }
            }
        }
    }

    Ok(deleted_count)
}
