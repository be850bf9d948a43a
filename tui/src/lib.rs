//! Taskdeck TUI - Terminal interface for taskdeck
//!
//! This crate provides a full-screen terminal UI with two views:
//!
//! - **Tasks**: a persisted to-do list with per-task countdown timers
//! - **Quiz**: a linear multiple-choice quiz with a score summary
//!
//! All state lives in `taskdeck-core`; this crate only renders it and
//! forwards keyboard input.

pub mod app;
pub mod form;
pub mod theme;
pub mod views;

pub use app::App;
