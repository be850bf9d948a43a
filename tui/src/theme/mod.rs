//! Theme and Colors
//!
//! Taskdeck's small palette: one accent for chrome and selection, plus
//! semantic colors for quiz feedback and secondary text.

use ratatui::style::Color;

/// Accent for titles, tabs, and the selection cursor.
pub const ACCENT: Color = Color::Magenta;

/// Correct answers / success.
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Wrong answers / errors.
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Secondary text: timers, key hints, locked options.
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);
