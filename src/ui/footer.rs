use crate::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar with the key hints of the current screen.
pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(route: Route, confirming: bool) -> Self {
        Self {
            hints: hints_for(route, confirming),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(route: Route, confirming: bool) -> &'static str {
    if confirming {
        return " y/Enter: Confirm │ n/Esc: Cancel";
    }
    match route {
        Route::StudentList => {
            " a: Add │ e: Edit │ g: Grades │ d: Delete │ /: Filter │ s/o: Sort │ r: Reset │ F5: Reload │ q: Quit"
        }
        Route::AddStudent | Route::EditStudent { .. } => {
            " Tab: Next field │ Enter: Save │ Esc: Back │ Ctrl+Q: Quit"
        }
        Route::StudentGrades { .. } => {
            " Enter: Save │ Ctrl+E: Edit │ Ctrl+D: Delete │ Ctrl+N: New │ Esc: Back │ Ctrl+Q: Quit"
        }
    }
}
