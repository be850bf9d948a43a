//! Quiz View
//!
//! Renders the current question with its options, answer feedback after a
//! pick (correct option green, wrong pick red, the rest dimmed), and the
//! final score summary.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use taskdeck_core::{Quiz, QuizPhase};

use crate::theme;

/// Render the quiz view into `area`.
pub fn render(frame: &mut Frame, area: Rect, quiz: &Quiz, cursor: usize) {
    let block = Block::default().borders(Borders::ALL).title(" Quiz ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match quiz.phase() {
        QuizPhase::Finished => render_summary(frame, inner, quiz),
        phase => render_question(frame, inner, quiz, cursor, phase),
    }
}

fn render_question(frame: &mut Frame, area: Rect, quiz: &Quiz, cursor: usize, phase: QuizPhase) {
    let Some(question) = quiz.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::styled(
            format!("{}. {}", quiz.current_index() + 1, question.text),
            Style::default().fg(theme::ACCENT),
        ),
        Line::raw(""),
    ];

    for (i, answer) in question.answers.iter().enumerate() {
        let (marker, style) = match phase {
            QuizPhase::Answered { selected } => {
                // Correct option always highlighted; a wrong pick marked red.
                if answer.correct {
                    ("  ", Style::default().fg(theme::SUCCESS_GREEN))
                } else if i == selected {
                    ("  ", Style::default().fg(theme::ERROR_RED))
                } else {
                    ("  ", Style::default().fg(theme::DIM_GRAY))
                }
            }
            _ => {
                if i == cursor {
                    ("> ", Style::default().fg(theme::ACCENT))
                } else {
                    ("  ", Style::default())
                }
            }
        };
        lines.push(Line::styled(
            format!("{marker}{}) {}", i + 1, answer.text),
            style,
        ));
    }

    if matches!(phase, QuizPhase::Answered { .. }) {
        lines.push(Line::raw(""));
        let next = if quiz.current_index() + 1 < quiz.total() {
            "Enter: next question"
        } else {
            "Enter: show score"
        };
        lines.push(Line::styled(next, Style::default().fg(theme::DIM_GRAY)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_summary(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let mut lines = vec![
        Line::styled(quiz.score_line(), Style::default().fg(theme::ACCENT)),
        Line::raw(""),
        Line::raw("Summary:"),
    ];

    for (i, result) in quiz.results().iter().enumerate() {
        let style = if result.was_correct {
            Style::default().fg(theme::SUCCESS_GREEN)
        } else {
            Style::default().fg(theme::ERROR_RED)
        };
        lines.push(Line::styled(result.summary_line(i + 1), style));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Enter: play again",
        Style::default().fg(theme::DIM_GRAY),
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
