//! One module per routed screen: view-local state plus its render function.

pub mod student_form;
pub mod student_grades;
pub mod student_list;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::ApiError;
use crate::forms::FormError;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR};

/// Move `selected` by `delta` within `0..len`, clamping at both ends.
pub(crate) fn step_selection(selected: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}

/// Next index in a ring of `len` focusable fields.
pub(crate) fn cycle_focus(focused: usize, forward: bool, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focused + 1) % len
    } else {
        (focused + len - 1) % len
    }
}

/// `Label: value` with a cursor marker when focused.
pub(crate) fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_SEPARATOR)
    };
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label:>12}: "), label_style),
        Span::styled(format!("{value}{cursor}"), Style::default().fg(HEADER_TEXT)),
    ])
}

pub(crate) fn error_lines(errors: &[FormError]) -> Vec<Line<'static>> {
    errors
        .iter()
        .map(|error| {
            Line::from(Span::styled(
                format!("  ✗ {error}"),
                Style::default().fg(STATUS_ERROR),
            ))
        })
        .collect()
}

/// Loading indicator or the last API error of a collection.
pub(crate) fn status_line(loading: bool, error: Option<&ApiError>) -> Line<'static> {
    if loading {
        return Line::from(Span::styled("Loading…", Style::default().fg(STATUS_BUSY)));
    }
    match error {
        Some(error) => Line::from(Span::styled(
            format!("{}: {}", error.kind(), error.detail()),
            Style::default().fg(STATUS_ERROR),
        )),
        None => Line::default(),
    }
}
