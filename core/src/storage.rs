//! Task Persistence
//!
//! Saves and restores the task list as a single JSON entry, the terminal
//! analog of the browser's `localStorage["tasks"]`. The wire format is kept
//! byte-compatible with the original browser value: a JSON array of objects
//! with fields `id`, `title`, `timeLimit`, `remainingTime`, `completed`.
//!
//! Loading is deliberately forgiving: missing or invalid fields fall back
//! to defaults, and any read/parse failure is logged and swallowed so the
//! app always starts, worst case with an empty list.
//!
//! The entry lives at `<state dir>/tasks.json`. The state directory comes
//! from `TASKDECK_STATE_DIR`, falling back to the XDG data dir
//! (`~/.local/share/taskdeck`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::tasks::{Task, TaskId, TaskList};

/// Storage key for the task list; also the file stem on disk.
pub const TASKS_KEY: &str = "tasks";

/// Environment variable overriding the state directory.
pub const STATE_DIR_ENV: &str = "TASKDECK_STATE_DIR";

/// Errors from persisting the task list.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create the state directory or write the entry.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying IO error.
        source: io::Error,
    },

    /// Failed to serialize the task list.
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value store for the task list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Store rooted at the default state directory.
    #[must_use]
    pub fn new() -> Self {
        Self::at_dir(default_state_dir())
    }

    /// Store rooted at an explicit directory (used by tests).
    #[must_use]
    pub fn at_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{TASKS_KEY}.json")),
        }
    }

    /// Path of the tasks entry on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the task list.
    ///
    /// Any failure (missing entry, unreadable file, malformed JSON,
    /// non-array payload) yields an empty list; failures other than a
    /// missing entry are logged, never surfaced.
    #[must_use]
    pub fn load(&self) -> TaskList {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved tasks");
                return TaskList::new();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "failed to read tasks: {err}");
                return TaskList::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => TaskList::from_tasks(normalize_payload(value)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "malformed tasks entry: {err}");
                TaskList::new()
            }
        }
    }

    /// Persist the task list, creating the state directory if needed.
    ///
    /// Callers log and ignore the error: a failed save never interrupts
    /// the UI.
    pub fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| StorageError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        let payload = serde_json::to_string(tasks.tasks())?;
        fs::write(&self.path, payload).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the state directory: `$TASKDECK_STATE_DIR`, else the XDG data
/// dir, else the current directory.
#[must_use]
pub fn default_state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(STATE_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("taskdeck"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Normalize a stored payload into tasks.
///
/// Non-array payloads yield nothing; array elements that are not objects
/// are skipped. Object fields follow the original normalization rules:
/// missing or wrong-typed values fall back to defaults, and a missing
/// `remainingTime` is rebuilt from the time limit.
fn normalize_payload(value: Value) -> Vec<Task> {
    let Value::Array(entries) = value else {
        tracing::warn!("tasks entry is not an array; starting empty");
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::Object(_) => Some(normalize_task(&entry)),
            other => {
                tracing::debug!("skipping non-object tasks element: {other}");
                None
            }
        })
        .collect()
}

/// Rebuild one task from a stored object, defaulting every bad field.
fn normalize_task(entry: &Value) -> Task {
    let time_limit_minutes = u64_field(entry, "timeLimit").unwrap_or(0);
    let remaining_seconds =
        u64_field(entry, "remainingTime").unwrap_or(time_limit_minutes * 60);
    let id = entry
        .get("id")
        .and_then(Value::as_i64)
        .map_or_else(TaskId::now, TaskId);
    let title = entry
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let completed = entry
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Task {
        id,
        title,
        time_limit_minutes,
        remaining_seconds,
        completed,
    }
}

/// Read a non-negative integer field, accepting JSON numbers and numeric
/// strings (the original store went through JavaScript `Number()`).
fn u64_field(entry: &Value, key: &str) -> Option<u64> {
    match entry.get(key)? {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Some(v)
            } else {
                // Negative or fractional: clamp through f64.
                n.as_f64().map(|f| f.max(0.0) as u64)
            }
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
