use std::time::{Duration, Instant};

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::forms::StudentFilterForm;
use crate::model::{EntityId, LoadStudentsParams};
use crate::store::student::{select_all_students, select_students_error, select_students_loading};
use crate::store::AppState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT};

use super::{field_line, status_line, step_selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    Table,
    FirstNameFilter,
    LastNameFilter,
}

impl ListFocus {
    /// Tab order: table → first name → last name → table.
    pub fn next(self) -> Self {
        match self {
            ListFocus::Table => ListFocus::FirstNameFilter,
            ListFocus::FirstNameFilter => ListFocus::LastNameFilter,
            ListFocus::LastNameFilter => ListFocus::Table,
        }
    }
}

/// Student list screen: filter controls, selection and the debounce clock.
#[derive(Debug, Default)]
pub struct StudentListView {
    pub filter: StudentFilterForm,
    pub focus: ListFocus,
    pub selected: usize,
    filter_changed_at: Option<Instant>,
    last_params: Option<LoadStudentsParams>,
}

impl StudentListView {
    /// Text field under focus, if a filter is focused.
    pub fn focused_filter_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ListFocus::Table => None,
            ListFocus::FirstNameFilter => Some(&mut self.filter.first_name_filter),
            ListFocus::LastNameFilter => Some(&mut self.filter.last_name_filter),
        }
    }

    /// Restart the debounce window.
    pub fn mark_filter_changed(&mut self, now: Instant) {
        self.filter_changed_at = Some(now);
    }

    pub fn filter_pending(&self) -> bool {
        self.filter_changed_at.is_some()
    }

    /// Parameters to load once the filter has been quiet for `debounce`.
    ///
    /// Returns `None` while still inside the window, and also when the
    /// settled parameters equal the ones loaded last.
    pub fn settled_params(&mut self, now: Instant, debounce: Duration) -> Option<LoadStudentsParams> {
        let changed_at = self.filter_changed_at?;
        if now.saturating_duration_since(changed_at) < debounce {
            return None;
        }
        self.filter_changed_at = None;
        let params = self.filter.to_params();
        if self.last_params.as_ref() == Some(&params) {
            return None;
        }
        self.last_params = Some(params.clone());
        Some(params)
    }

    /// Parameters for an immediate load, cancelling any pending debounce.
    pub fn reload_params(&mut self) -> LoadStudentsParams {
        self.filter_changed_at = None;
        let params = self.filter.to_params();
        self.last_params = Some(params.clone());
        params
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        self.selected = step_selection(self.selected, delta, len);
    }

    /// Id of the highlighted row.
    pub fn selected_id(&self, state: &AppState) -> Option<EntityId> {
        let students = select_all_students(state);
        let index = self.selected.min(students.len().checked_sub(1)?);
        students.get(index).map(|student| student.id)
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &StudentListView, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_filter(frame, chunks[0], view);

    let students = select_all_students(state);
    let rows: Vec<Row> = students
        .iter()
        .map(|student| {
            Row::new(vec![
                student.id.to_string(),
                student.first_name.clone(),
                student.last_name.clone(),
                student.group_name.clone(),
            ])
        })
        .collect();
    let header = Row::new(vec!["ID", "First name", "Last name", "Group"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("› ")
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Students ({}) ", students.len()),
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    let selected = if students.is_empty() {
        None
    } else {
        Some(view.selected.min(students.len() - 1))
    };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, chunks[1], &mut table_state);

    let status = status_line(select_students_loading(state), select_students_error(state));
    frame.render_widget(Paragraph::new(status), chunks[2]);
}

fn render_filter(frame: &mut Frame<'_>, area: Rect, view: &StudentListView) {
    let filter = &view.filter;
    let sort = match filter.sort_by {
        Some(field) => format!("{} ({})", field.label(), filter.sort_order.as_param()),
        None => "none".to_string(),
    };
    let mut sort_line = field_line("Sort by", &sort, false);
    if view.filter_pending() {
        sort_line.spans.push(Span::raw("  …"));
    }
    let lines = vec![
        field_line(
            "First name",
            &filter.first_name_filter,
            view.focus == ListFocus::FirstNameFilter,
        ),
        field_line(
            "Last name",
            &filter.last_name_filter,
            view.focus == ListFocus::LastNameFilter,
        ),
        sort_line,
    ];
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .title(Line::from(" Filter "))
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}
