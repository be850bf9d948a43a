//! Tasks View
//!
//! Renders the to-do list (title, countdown, completion styling) and the
//! add/edit form when one is open.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use taskdeck_core::{format_seconds, Task, TaskList};

use crate::form::{FormField, TaskForm};
use crate::theme;

/// Height of the add/edit form area, including its border.
const FORM_HEIGHT: u16 = 4;

/// Render the tasks view into `area`.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &TaskList,
    selected: usize,
    form: Option<&TaskForm>,
) {
    let (list_area, form_area) = match form {
        Some(_) => {
            let [list_area, form_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(FORM_HEIGHT)])
                    .areas(area);
            (list_area, Some(form_area))
        }
        None => (area, None),
    };

    render_list(frame, list_area, tasks, selected);

    if let (Some(form_area), Some(form)) = (form_area, form) {
        render_form(frame, form_area, form);
    }
}

fn render_list(frame: &mut Frame, area: Rect, tasks: &TaskList, selected: usize) {
    let block = Block::default().borders(Borders::ALL).title(" Tasks ");

    if tasks.is_empty() {
        let placeholder = Paragraph::new("No tasks yet 😴")
            .style(Style::default().fg(theme::DIM_GRAY))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = tasks.tasks().iter().map(|t| ListItem::new(task_line(t))).collect();
    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(theme::ACCENT));

    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One display row: title, countdown, and a check mark when done.
fn task_line(task: &Task) -> Line<'static> {
    let title_style = if task.completed {
        Style::default()
            .fg(theme::DIM_GRAY)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(task.title.clone(), title_style),
        Span::raw("  "),
        Span::styled(
            format!("⏱ {}", format_seconds(task.remaining_seconds)),
            Style::default().fg(theme::DIM_GRAY),
        ),
    ];
    if task.completed {
        spans.push(Span::styled("  ✅", Style::default().fg(theme::SUCCESS_GREEN)));
    }

    Line::from(spans)
}

fn render_form(frame: &mut Frame, area: Rect, form: &TaskForm) {
    let title = if form.editing.is_some() {
        " Edit task "
    } else {
        " Add task "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let field = |label: &str, value: &str, focused: bool| -> Line<'static> {
        if focused {
            Line::styled(
                format!("{label} {value}_"),
                Style::default().fg(theme::ACCENT),
            )
        } else {
            Line::raw(format!("{label} {value}"))
        }
    };

    let lines = vec![
        field("Title:  ", &form.title, form.focus == FormField::Title),
        field("Minutes:", &form.minutes, form.focus == FormField::Minutes),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
