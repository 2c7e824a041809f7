use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, POPUP_BORDER};
use crate::ui::views::{student_form, student_grades, student_list};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.route(), app.state());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::StudentList => student_list::render(frame, body, app.list(), app.state()),
        Screen::StudentForm(view) => student_form::render(frame, body, view, app.state()),
        Screen::StudentGrades(view) => student_grades::render(frame, body, view, app.state()),
    }
    let footer_widget = Footer::new(app.route(), app.confirm().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(prompt) = app.confirm().prompt() {
        let lines = vec![
            Line::from(""),
            Line::from(format!("  {prompt}  ")),
            Line::from(""),
            Line::from(Span::styled(
                "  y: Delete   n: Keep",
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popup_width = content_width.saturating_add(4).max(32);
        let popup_height = lines.len().saturating_add(2) as u16;
        let area = centered_rect_by_size(body, popup_width, popup_height);

        frame.render_widget(Clear, area);
        let popup = Block::default()
            .title(Span::styled(" Confirm ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(lines).block(popup);
        frame.render_widget(widget, area);
    }
}
