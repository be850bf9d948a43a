//! Taskdeck Core - Headless State for the Taskdeck Terminal App
//!
//! This crate provides the application state for taskdeck, completely
//! independent of any UI framework: a to-do list with per-task countdown
//! timers (persisted as a single JSON entry) and a linear multiple-choice
//! quiz. It can drive a TUI, a web UI, or run headless for testing.
//!
//! # Key Types
//!
//! - [`TaskList`]: the to-do list with add/update/delete/toggle/tick
//! - [`TaskInput`]: validated form input; invalid input never mutates state
//! - [`TaskStore`]: JSON persistence with defensive normalization
//! - [`Quiz`]: the quiz state machine (Showing / Answered / Finished)
//!
//! # Module Overview
//!
//! - [`tasks`]: task model and list operations
//! - [`quiz`]: question bank and quiz progression
//! - [`storage`]: loading and saving the `tasks` entry
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework. It's pure state logic that can be used anywhere.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod quiz;
pub mod storage;
pub mod tasks;

// Re-exports for convenience
pub use quiz::{default_questions, Answer, Question, Quiz, QuizPhase, QuizResult};
pub use storage::{default_state_dir, StorageError, TaskStore, STATE_DIR_ENV, TASKS_KEY};
pub use tasks::{format_seconds, Task, TaskId, TaskInput, TaskList};
