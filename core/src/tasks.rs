//! Task List State
//!
//! Types and operations for the to-do list: titled tasks with per-task
//! countdown timers. This module owns all mutation rules; UI surfaces just
//! render what they are given and forward user input.
//!
//! # Design Philosophy
//!
//! The list is plain in-memory state with a one-second `tick` driven by the
//! surface's timer. Validation lives in [`TaskInput`] so that an invalid
//! form submission never reaches the list: the add/update operation either
//! applies fully or silently does nothing.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Task identifier: the creation timestamp in milliseconds since the epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub i64);

impl TaskId {
    /// Current epoch time in milliseconds.
    #[must_use]
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        Self(ms)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A to-do item with a countdown timer.
///
/// Serializes to the browser-era wire format: `id`, `title`, `timeLimit`
/// (minutes), `remainingTime` (seconds), `completed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (creation timestamp in ms).
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Time limit in minutes, as entered by the user.
    #[serde(rename = "timeLimit")]
    pub time_limit_minutes: u64,
    /// Seconds left on the countdown. Never underflows.
    #[serde(rename = "remainingTime")]
    pub remaining_seconds: u64,
    /// Whether the task is marked done.
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task with a full countdown.
    #[must_use]
    pub fn new(id: TaskId, title: String, time_limit_minutes: u64) -> Self {
        Self {
            id,
            title,
            time_limit_minutes,
            remaining_seconds: time_limit_minutes * 60,
            completed: false,
        }
    }

    /// Whether the countdown is still running for this task.
    #[must_use]
    pub fn is_counting(&self) -> bool {
        !self.completed && self.remaining_seconds > 0
    }
}

/// Validated form input for creating or updating a task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskInput {
    /// Non-empty, trimmed title.
    pub title: String,
    /// Strictly positive time limit in minutes.
    pub minutes: u64,
}

impl TaskInput {
    /// Parse raw form fields.
    ///
    /// Returns `None` when the title is blank or the minutes value is not a
    /// positive integer. Callers treat `None` as a silent no-op: the form
    /// stays open and no error is shown.
    #[must_use]
    pub fn parse(title: &str, minutes: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let minutes: u64 = minutes.trim().parse().ok()?;
        if minutes == 0 {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            minutes,
        })
    }
}

/// The to-do list.
///
/// Tasks keep insertion order for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from already-normalized tasks (storage load path).
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a new task from validated input. Returns the assigned id.
    ///
    /// Ids are `Date.now()`-style epoch timestamps; two adds inside the
    /// same millisecond bump the id until unique so that delete/toggle by
    /// id stays unambiguous.
    pub fn add(&mut self, input: TaskInput) -> TaskId {
        let mut id = TaskId::now();
        while self.get(id).is_some() {
            id = TaskId(id.0 + 1);
        }
        self.tasks.push(Task::new(id, input.title, input.minutes));
        id
    }

    /// Update an existing task from validated input (edit commit).
    ///
    /// Preserves the task's `id` and `completed` flag, replaces title and
    /// time limit, and resets the countdown to the new full duration.
    /// Returns `false` if no task has the given id.
    pub fn update(&mut self, id: TaskId, input: TaskInput) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = input.title;
                task.time_limit_minutes = input.minutes;
                task.remaining_seconds = input.minutes * 60;
                true
            }
            None => false,
        }
    }

    /// Remove a task by id. Returns `false` if it was not present.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flip a task's `completed` flag, leaving every other field unchanged.
    /// Returns `false` if no task has the given id.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// One countdown tick: decrement `remaining_seconds` by exactly 1 for
    /// every incomplete task with time left. Completed and zero-remaining
    /// tasks are untouched; a task reaching zero stays visible at `0:00`
    /// with no auto-complete.
    ///
    /// Returns `true` if any task changed (the caller persists on change).
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for task in &mut self.tasks {
            if task.is_counting() {
                task.remaining_seconds -= 1;
                changed = true;
            }
        }
        changed
    }
}

/// Format a second count as `m:ss` with zero-padded seconds, e.g. `5:00`.
#[must_use]
pub fn format_seconds(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(title: &str, minutes: &str) -> TaskInput {
        TaskInput::parse(title, minutes).expect("valid input")
    }

    #[test]
    fn test_add_converts_minutes_to_seconds() {
        let mut list = TaskList::new();
        let id = list.add(input("Read", "5"));

        let task = list.get(id).unwrap();
        assert_eq!(task.title, "Read");
        assert_eq!(task.time_limit_minutes, 5);
        assert_eq!(task.remaining_seconds, 300);
        assert!(!task.completed);
    }

    #[test]
    fn test_input_validation_rejects_bad_fields() {
        assert_eq!(TaskInput::parse("", "5"), None);
        assert_eq!(TaskInput::parse("   ", "5"), None);
        assert_eq!(TaskInput::parse("Read", "0"), None);
        assert_eq!(TaskInput::parse("Read", "-3"), None);
        assert_eq!(TaskInput::parse("Read", "five"), None);
        assert_eq!(TaskInput::parse("Read", ""), None);
    }

    #[test]
    fn test_input_trims_title_and_minutes() {
        let parsed = TaskInput::parse("  Read  ", " 5 ").unwrap();
        assert_eq!(parsed.title, "Read");
        assert_eq!(parsed.minutes, 5);
    }

    #[test]
    fn test_tick_decrements_only_running_tasks() {
        let mut list = TaskList::new();
        let running = list.add(input("Running", "1"));
        let done = list.add(input("Done", "1"));
        let drained = list.add(input("Drained", "1"));

        list.toggle(done);
        // Drain the third task to zero.
        for _ in 0..60 {
            list.tick();
        }
        // The completed task never moved; now nothing but `running` can.
        assert_eq!(list.get(done).unwrap().remaining_seconds, 60);
        assert_eq!(list.get(drained).unwrap().remaining_seconds, 0);

        let before_running = list.get(running).unwrap().remaining_seconds;
        assert!(list.tick());
        assert_eq!(
            list.get(running).unwrap().remaining_seconds,
            before_running - 1
        );
        assert_eq!(list.get(done).unwrap().remaining_seconds, 60);
        assert_eq!(list.get(drained).unwrap().remaining_seconds, 0);
    }

    #[test]
    fn test_tick_reports_no_change_when_idle() {
        let mut list = TaskList::new();
        let id = list.add(input("Read", "1"));
        list.toggle(id);
        assert!(!list.tick());
    }

    #[test]
    fn test_zero_remaining_never_goes_negative() {
        let mut list = TaskList::new();
        let id = list.add(input("Short", "1"));
        for _ in 0..120 {
            list.tick();
        }
        assert_eq!(list.get(id).unwrap().remaining_seconds, 0);
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_flips_only_completed() {
        let mut list = TaskList::new();
        let id = list.add(input("Read", "5"));
        let before = list.get(id).unwrap().clone();

        assert!(list.toggle(id));
        let after = list.get(id).unwrap();
        assert!(after.completed);
        assert_eq!(after.title, before.title);
        assert_eq!(after.time_limit_minutes, before.time_limit_minutes);
        assert_eq!(after.remaining_seconds, before.remaining_seconds);

        assert!(list.toggle(id));
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_update_preserves_id_and_completed() {
        let mut list = TaskList::new();
        let id = list.add(input("Read", "5"));
        list.toggle(id);

        assert!(list.update(id, input("Read more", "2")));
        let task = list.get(id).unwrap();
        assert_eq!(task.id, id);
        assert!(task.completed);
        assert_eq!(task.title, "Read more");
        assert_eq!(task.time_limit_minutes, 2);
        assert_eq!(task.remaining_seconds, 120);
    }

    #[test]
    fn test_update_and_delete_missing_id() {
        let mut list = TaskList::new();
        assert!(!list.update(TaskId(42), input("Read", "5")));
        assert!(!list.delete(TaskId(42)));
        assert!(!list.toggle(TaskId(42)));
    }

    #[test]
    fn test_delete_removes_task() {
        let mut list = TaskList::new();
        let a = list.add(input("A", "1"));
        let b = list.add(input("B", "1"));

        assert!(list.delete(a));
        assert_eq!(list.len(), 1);
        assert!(list.get(a).is_none());
        assert!(list.get(b).is_some());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TaskList::new();
        let a = list.add(input("A", "1"));
        let b = list.add(input("B", "1"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(300), "5:00");
        assert_eq!(format_seconds(59), "0:59");
        assert_eq!(format_seconds(61), "1:01");
        assert_eq!(format_seconds(0), "0:00");
    }
}
