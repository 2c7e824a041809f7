use crate::navigation::Route;
use crate::store::grade::select_grades_loading;
use crate::store::student::select_students_loading;
use crate::store::AppState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: app name, current route and per-collection activity.
pub struct Header<'a> {
    route: Route,
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, state: &'a AppState) -> Self {
        Self { route, state }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Gradebook",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title().to_string(), text_style),
            Span::styled(format!(" ({})", self.route.path()), separator_style),
            Span::styled("  │  ", separator_style),
            activity("students", select_students_loading(self.state)),
            Span::styled("  ", text_style),
            activity("grades", select_grades_loading(self.state)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn activity(label: &'static str, loading: bool) -> Span<'static> {
    if loading {
        Span::styled(format!("● {label}"), Style::default().fg(STATUS_BUSY))
    } else {
        Span::styled(format!("● {label}"), Style::default().fg(STATUS_OK))
    }
}
