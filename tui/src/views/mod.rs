//! View Rendering
//!
//! One module per view. Views are pure render functions over core state;
//! they own no state of their own.

pub mod quiz;
pub mod tasks;
