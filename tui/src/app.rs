//! Main Application
//!
//! The App struct manages the TUI lifecycle:
//! - Event loop (keyboard events, one-second countdown tick, frame tick)
//! - Two tabbed views over `taskdeck-core` state (Tasks, Quiz)
//! - Save-on-change persistence of the task list
//!
//! All updates happen on this single loop: the countdown interval and the
//! keyboard stream are multiplexed with `tokio::select!`, so task state
//! never needs locking.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::{Frame, Terminal};

use taskdeck_core::{Quiz, QuizPhase, Task, TaskList, TaskStore};

use crate::form::TaskForm;
use crate::theme;
use crate::views;

/// Which view is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    /// The to-do list with countdown timers.
    Tasks,
    /// The multiple-choice quiz.
    Quiz,
}

impl View {
    fn other(self) -> Self {
        match self {
            View::Tasks => View::Quiz,
            View::Quiz => View::Tasks,
        }
    }

    fn tab_index(self) -> usize {
        match self {
            View::Tasks => 0,
            View::Quiz => 1,
        }
    }
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    /// Current view.
    view: View,

    // === Tasks ===
    /// The to-do list.
    tasks: TaskList,
    /// Persistence for the task list.
    store: TaskStore,
    /// Cursor into the task list.
    selected: usize,
    /// Open add/edit form, if any.
    form: Option<TaskForm>,

    // === Quiz ===
    /// The quiz run.
    quiz: Quiz,
    /// Cursor over the current question's options.
    quiz_cursor: usize,
}

impl App {
    /// Create the app, restoring tasks from the default store.
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }

    /// Create the app over an explicit store (used by tests).
    pub fn with_store(store: TaskStore) -> Self {
        let tasks = store.load();
        tracing::debug!(count = tasks.len(), "restored tasks");

        Self {
            running: true,
            view: View::Tasks,
            tasks,
            store,
            selected: 0,
            form: None,
            quiz: Quiz::with_default_questions(),
            quiz_cursor: 0,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~10 FPS is plenty for a one-second countdown
        let frame_duration = Duration::from_millis(100);

        // Async stream for non-blocking terminal events
        let mut events = EventStream::new();

        // The countdown driver. The first interval tick completes
        // immediately; consume it so the countdown starts a full second
        // after launch.
        let mut countdown = tokio::time::interval(Duration::from_secs(1));
        countdown.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        countdown.tick().await;

        // Render initial frame immediately so the user sees UI
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events - highest priority
                maybe_event = events.next() => {
                    if let Some(Ok(Event::Key(key))) = maybe_event {
                        // Only handle Press events (not Release or Repeat)
                        if key.kind == KeyEventKind::Press {
                            self.handle_key(key);
                        }
                    }
                }

                // Countdown tick - decrement running timers, persist
                _ = countdown.tick() => {
                    if self.tasks.tick() {
                        self.save();
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(frame_duration) => {}
            }

            self.render(terminal)?;

            // Frame rate limiting
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: event::KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        // An open form captures all input
        if self.form.is_some() {
            self.handle_form_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,
            KeyCode::Tab => self.view = self.view.other(),
            _ => match self.view {
                View::Tasks => self.handle_tasks_key(key.code),
                View::Quiz => self.handle_quiz_key(key.code),
            },
        }
    }

    /// Keys while the add/edit form is open
    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.form = None,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab => {
                if let Some(form) = self.form.as_mut() {
                    form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.form.as_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.form.as_mut() {
                    form.push(c);
                }
            }
            _ => {}
        }
    }

    /// Commit the form. Invalid input is a silent no-op: the form stays
    /// open, no error is shown.
    fn submit_form(&mut self) {
        let Some(form) = &self.form else { return };
        let Some(input) = form.parsed() else { return };

        match form.editing {
            Some(id) => {
                self.tasks.update(id, input);
            }
            None => {
                self.tasks.add(input);
                self.selected = self.tasks.len() - 1;
            }
        }
        self.form = None;
        self.save();
    }

    /// Keys for the Tasks view
    fn handle_tasks_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.tasks.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('a') => self.form = Some(TaskForm::blank()),
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.form = Some(TaskForm::prefill(task));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_task().map(|t| t.id) {
                    self.tasks.delete(id);
                    self.clamp_selection();
                    self.save();
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_task().map(|t| t.id) {
                    self.tasks.toggle(id);
                    self.save();
                }
            }
            _ => {}
        }
    }

    /// Keys for the Quiz view, by phase
    fn handle_quiz_key(&mut self, code: KeyCode) {
        match self.quiz.phase() {
            QuizPhase::Showing => {
                let options = self
                    .quiz
                    .current_question()
                    .map_or(0, |q| q.answers.len());
                match code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.quiz_cursor = self.quiz_cursor.saturating_sub(1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        if self.quiz_cursor + 1 < options {
                            self.quiz_cursor += 1;
                        }
                    }
                    KeyCode::Enter => {
                        self.quiz.answer(self.quiz_cursor);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        // '1'..'9' pick an option directly
                        let index = (c as usize - '0' as usize).wrapping_sub(1);
                        if index < options {
                            self.quiz.answer(index);
                        }
                    }
                    _ => {}
                }
            }
            QuizPhase::Answered { .. } => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('n')) {
                    self.quiz.advance();
                    self.quiz_cursor = 0;
                }
            }
            QuizPhase::Finished => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.quiz.restart();
                    self.quiz_cursor = 0;
                }
            }
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected)
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }

    /// Persist the task list. Failures are logged, never surfaced.
    fn save(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            tracing::warn!("failed to persist tasks: {err}");
        }
    }

    /// Render the UI
    fn render(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        terminal.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    /// Draw one frame: tab bar, active view, status bar.
    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let tabs = Tabs::new(vec![" Tasks ", " Quiz "])
            .select(self.view.tab_index())
            .highlight_style(Style::default().fg(theme::ACCENT));
        frame.render_widget(tabs, tabs_area);

        match self.view {
            View::Tasks => {
                views::tasks::render(frame, body, &self.tasks, self.selected, self.form.as_ref());
            }
            View::Quiz => {
                views::quiz::render(frame, body, &self.quiz, self.quiz_cursor);
            }
        }

        let hints = self.status_hints();
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme::DIM_GRAY)),
            status,
        );
    }

    /// Key hints for the status bar, by mode.
    fn status_hints(&self) -> &'static str {
        if self.form.is_some() {
            return " Enter save | Tab switch field | Esc cancel";
        }
        match self.view {
            View::Tasks => {
                " a add | e edit | d delete | Space toggle done | Tab quiz | q quit"
            }
            View::Quiz => match self.quiz.phase() {
                QuizPhase::Showing => " Up/Down + Enter answer | 1-4 pick | Tab tasks | q quit",
                QuizPhase::Answered { .. } => " Enter next question | Tab tasks | q quit",
                QuizPhase::Finished => " Enter play again | Tab tasks | q quit",
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
