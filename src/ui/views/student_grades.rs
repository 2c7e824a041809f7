use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::forms::{FormError, GradeField, GradeForm};
use crate::model::{EntityId, Grade};
use crate::store::grade::{select_grades_by_student_id, select_grades_error, select_grades_loading};
use crate::store::student::select_student_by_id;
use crate::store::AppState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

use super::{cycle_focus, error_lines, field_line, status_line, step_selection};

/// Grades of one student with an inline add/edit form.
#[derive(Debug)]
pub struct StudentGradesView {
    pub student_id: EntityId,
    pub selected: usize,
    pub form: GradeForm,
    pub focused: usize,
    pub errors: Vec<FormError>,
    today: NaiveDate,
}

impl StudentGradesView {
    pub fn new(student_id: EntityId, today: NaiveDate) -> Self {
        Self {
            student_id,
            selected: 0,
            form: GradeForm::new(student_id, today),
            focused: 0,
            errors: Vec::new(),
            today,
        }
    }

    /// Back to an empty add form; the grade selection is kept.
    pub fn reset_form(&mut self) {
        self.form = GradeForm::new(self.student_id, self.today);
        self.focused = 0;
        self.errors.clear();
    }

    /// Load `grade` into the form for editing.
    pub fn edit(&mut self, grade: &Grade) {
        self.form = GradeForm::from_grade(grade);
        self.focused = 0;
        self.errors.clear();
    }

    /// True when the form differs from a fresh add form.
    pub fn form_dirty(&self) -> bool {
        self.form != GradeForm::new(self.student_id, self.today)
    }

    pub fn field(&self) -> GradeField {
        GradeField::ALL[self.focused.min(GradeField::ALL.len() - 1)]
    }

    pub fn focus_next(&mut self, forward: bool) {
        self.focused = cycle_focus(self.focused, forward, GradeField::ALL.len());
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        let field = self.field();
        self.form.value_mut(field)
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        self.selected = step_selection(self.selected, delta, len);
    }

    /// The highlighted grade of this student.
    pub fn selected_grade<'a>(&self, state: &'a AppState) -> Option<&'a Grade> {
        let grades = select_grades_by_student_id(state, self.student_id);
        let index = self.selected.min(grades.len().checked_sub(1)?);
        grades.get(index).copied()
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &StudentGradesView, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),
            Constraint::Length(7 + view.errors.len() as u16),
            Constraint::Length(1),
        ])
        .split(area);

    let student = match select_student_by_id(state, view.student_id) {
        Some(student) => format!("{} ({})", student.full_name(), student.group_name),
        None => format!("student #{}", view.student_id),
    };
    let grades = select_grades_by_student_id(state, view.student_id);
    let rows: Vec<Row> = grades
        .iter()
        .map(|grade| {
            Row::new(vec![
                grade.subject.clone(),
                format!("{}", grade.score),
                grade.grade_date.to_string(),
            ])
        })
        .collect();
    let header = Row::new(vec!["Subject", "Score", "Date"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Percentage(50),
        Constraint::Length(8),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ")
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Grades of {student} "),
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    let selected = if grades.is_empty() {
        None
    } else {
        Some(view.selected.min(grades.len() - 1))
    };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let focused = view.field();
    let mut lines: Vec<Line> = GradeField::ALL
        .iter()
        .map(|&field| field_line(field.label(), view.form.value(field), field == focused))
        .collect();
    lines.extend(error_lines(&view.errors));
    let title = if view.form.is_edit() {
        " Edit grade "
    } else {
        " Add grade "
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(form, chunks[1]);

    let status = status_line(select_grades_loading(state), select_grades_error(state));
    frame.render_widget(Paragraph::new(status), chunks[2]);
}
