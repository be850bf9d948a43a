//! Task Form State
//!
//! The add/edit form for the Tasks view: a title field and a minutes
//! field. Validation is delegated to [`TaskInput::parse`] so the form and
//! the headless core agree on what counts as valid; an invalid submit is a
//! silent no-op and the form stays open.

use taskdeck_core::{Task, TaskId, TaskInput};

/// Which form field has keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// The task title.
    Title,
    /// The time limit in minutes.
    Minutes,
}

/// In-progress add or edit.
#[derive(Clone, Debug)]
pub struct TaskForm {
    /// Raw title field contents.
    pub title: String,
    /// Raw minutes field contents.
    pub minutes: String,
    /// Field receiving keystrokes.
    pub focus: FormField,
    /// When set, submitting updates this task instead of adding a new one.
    pub editing: Option<TaskId>,
}

impl TaskForm {
    /// Empty form for adding a task.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            minutes: String::new(),
            focus: FormField::Title,
            editing: None,
        }
    }

    /// Form prefilled from an existing task (begin edit). The task's id is
    /// remembered so the submit preserves it.
    pub fn prefill(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            minutes: task.time_limit_minutes.to_string(),
            focus: FormField::Title,
            editing: Some(task.id),
        }
    }

    /// Move focus to the other field.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Minutes,
            FormField::Minutes => FormField::Title,
        };
    }

    /// Type a character into the focused field.
    pub fn push(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Minutes => self.minutes.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Minutes => {
                self.minutes.pop();
            }
        }
    }

    /// Validate the current contents. `None` means the submit is rejected.
    pub fn parsed(&self) -> Option<TaskInput> {
        TaskInput::parse(&self.title, &self.minutes)
    }
}
