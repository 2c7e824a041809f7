use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::forms::{FormError, StudentField, StudentForm};
use crate::model::{EntityId, Student};
use crate::store::student::{select_students_error, select_students_loading};
use crate::store::AppState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR};

use super::{cycle_focus, error_lines, field_line, status_line};

/// Add/edit student screen.
///
/// In edit mode the form starts empty and is filled once the student
/// arrives in the store (`awaiting` holds its id until then).
#[derive(Debug, Default)]
pub struct StudentFormView {
    pub form: StudentForm,
    pub focused: usize,
    pub errors: Vec<FormError>,
    awaiting: Option<EntityId>,
}

impl StudentFormView {
    pub fn for_add() -> Self {
        Self::default()
    }

    pub fn for_edit(id: EntityId) -> Self {
        Self {
            awaiting: Some(id),
            ..Self::default()
        }
    }

    pub fn awaiting(&self) -> Option<EntityId> {
        self.awaiting
    }

    /// Fill the form from `student` and stop waiting for it.
    pub fn fill(&mut self, student: &Student) {
        self.form = StudentForm::from_student(student);
        self.awaiting = None;
    }

    pub fn field(&self) -> StudentField {
        StudentField::ALL[self.focused.min(StudentField::ALL.len() - 1)]
    }

    pub fn focus_next(&mut self, forward: bool) {
        self.focused = cycle_focus(self.focused, forward, StudentField::ALL.len());
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        let field = self.field();
        self.form.value_mut(field)
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &StudentFormView, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let title = if view.form.is_edit() || view.awaiting.is_some() {
        " Edit student "
    } else {
        " Add student "
    };

    let mut lines = vec![Line::default()];
    if let Some(id) = view.awaiting {
        lines.push(Line::from(Span::styled(
            format!("  Waiting for student #{id}…"),
            Style::default().fg(HEADER_SEPARATOR),
        )));
    } else {
        let focused = view.field();
        lines.extend(
            StudentField::ALL
                .iter()
                .map(|&field| field_line(field.label(), view.form.value(field), field == focused)),
        );
    }
    if !view.errors.is_empty() {
        lines.push(Line::default());
        lines.extend(error_lines(&view.errors));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, chunks[0]);

    let status = status_line(select_students_loading(state), select_students_error(state));
    frame.render_widget(Paragraph::new(status), chunks[1]);
}
