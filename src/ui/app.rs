use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::watch;

use crate::config::UiConfig;
use crate::model::LoadStudentsParams;
use crate::navigation::{Route, Router};
use crate::store::grade::{select_grades_by_student_id, GradeIntent};
use crate::store::mvi::Reducer;
use crate::store::student::{select_all_students, select_student_by_id, StudentIntent};
use crate::store::{AppIntent, AppState, Store};
use crate::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState, DeleteTarget};
use crate::ui::input::is_ctrl_char;
use crate::ui::views::student_form::StudentFormView;
use crate::ui::views::student_grades::StudentGradesView;
use crate::ui::views::student_list::{ListFocus, StudentListView};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View-local state of the screen the router points at.
#[derive(Debug)]
pub enum Screen {
    StudentList,
    StudentForm(StudentFormView),
    StudentGrades(StudentGradesView),
}

/// UI state of the terminal client.
///
/// Entity data lives in the [`Store`]; the app keeps a snapshot refreshed by
/// [`App::sync`] plus whatever belongs to the screen on display.
pub struct App {
    should_quit: bool,
    store: Store,
    router: Router,
    route_rx: watch::Receiver<Route>,
    state_rx: watch::Receiver<AppState>,
    snapshot: AppState,
    route: Route,
    /// Kept across navigation so filters survive a trip to a form and back.
    list: StudentListView,
    screen: Screen,
    confirm: ConfirmState,
    debounce: Duration,
    today: NaiveDate,
}

impl App {
    pub fn new(store: Store, router: Router, ui: &UiConfig) -> Self {
        Self::with_today(store, router, ui, chrono::Local::now().date_naive())
    }

    /// Like [`App::new`] with a fixed date for new grade forms.
    pub fn with_today(store: Store, router: Router, ui: &UiConfig, today: NaiveDate) -> Self {
        let mut route_rx = router.subscribe();
        let route = *route_rx.borrow_and_update();
        let mut state_rx = store.subscribe();
        let snapshot = state_rx.borrow_and_update().clone();
        let mut app = Self {
            should_quit: false,
            store,
            router,
            route_rx,
            state_rx,
            snapshot,
            route,
            list: StudentListView::default(),
            screen: Screen::StudentList,
            confirm: ConfirmState::default(),
            debounce: Duration::from_millis(ui.filter_debounce_ms),
            today,
        };
        app.enter_route(route);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn state(&self) -> &AppState {
        &self.snapshot
    }

    pub fn list(&self) -> &StudentListView {
        &self.list
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }

    /// Whether Ctrl+E/D/N mean something right now (grades screen, no dialog).
    pub fn accepts_screen_chords(&self) -> bool {
        matches!(self.screen, Screen::StudentGrades(_)) && !self.confirm.is_visible()
    }

    /// Pull route changes and the latest store state into the UI.
    ///
    /// Returns `true` when anything visible may have changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        if self.route_rx.has_changed().unwrap_or(false) {
            let route = *self.route_rx.borrow_and_update();
            self.enter_route(route);
            changed = true;
        }
        if self.state_rx.has_changed().unwrap_or(false) {
            self.snapshot = self.state_rx.borrow_and_update().clone();
            changed = true;
        }
        if let Screen::StudentForm(view) = &mut self.screen {
            if let Some(id) = view.awaiting() {
                if let Some(student) = select_student_by_id(&self.snapshot, id) {
                    view.fill(student);
                    changed = true;
                }
            }
        }
        changed
    }

    /// Fire the debounced student reload once the filter has settled.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(params) = self.list.settled_params(now, self.debounce) {
            self.load_students(params);
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.router.navigate(route);
        let _ = self.sync();
    }

    fn dispatch(&self, intent: impl Into<AppIntent>) {
        self.store.dispatch(intent);
    }

    fn load_students(&self, params: LoadStudentsParams) {
        self.dispatch(StudentIntent::Load { params });
    }

    /// Switch screens and issue the loads the new screen needs.
    fn enter_route(&mut self, route: Route) {
        tracing::debug!(route = %route, "Entering route");
        self.route = route;
        self.confirm = ConfirmState::Hidden;
        match route {
            Route::StudentList => {
                self.screen = Screen::StudentList;
                self.list.focus = ListFocus::Table;
                let params = self.list.reload_params();
                self.load_students(params);
            }
            Route::AddStudent => {
                self.screen = Screen::StudentForm(StudentFormView::for_add());
            }
            Route::EditStudent { id } => {
                let mut view = StudentFormView::for_edit(id);
                if let Some(student) = select_student_by_id(&self.snapshot, id) {
                    view.fill(student);
                }
                self.screen = Screen::StudentForm(view);
                self.dispatch(StudentIntent::LoadOne { id });
            }
            Route::StudentGrades { student_id } => {
                self.screen =
                    Screen::StudentGrades(StudentGradesView::new(student_id, self.today));
                if select_student_by_id(&self.snapshot, student_id).is_none() {
                    self.load_students(LoadStudentsParams::default());
                }
                self.dispatch(GradeIntent::LoadByStudent { student_id });
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if self.confirm.is_visible() {
            self.on_confirm_key(key);
            return;
        }
        match self.screen {
            Screen::StudentList => self.on_list_key(key),
            Screen::StudentForm(_) => self.on_student_form_key(key),
            Screen::StudentGrades(_) => self.on_grades_key(key),
        }
    }

    fn on_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let target = self.confirm.target();
                dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Accept);
                match target {
                    Some(DeleteTarget::Student(id)) => self.dispatch(StudentIntent::Delete { id }),
                    Some(DeleteTarget::Grade(id)) => self.dispatch(GradeIntent::Delete { id }),
                    None => {}
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Dismiss);
            }
            _ => {}
        }
    }

    fn ask_delete(&mut self, prompt: String, target: DeleteTarget) {
        dispatch_mvi!(
            self,
            confirm,
            ConfirmReducer,
            ConfirmIntent::Ask { prompt, target }
        );
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        if let Some(value) = self.list.focused_filter_mut() {
            match key.code {
                KeyCode::Char(ch) => {
                    value.push(ch);
                    self.list.mark_filter_changed(now);
                }
                KeyCode::Backspace => {
                    if value.pop().is_some() {
                        self.list.mark_filter_changed(now);
                    }
                }
                KeyCode::Tab => self.list.focus = self.list.focus.next(),
                KeyCode::Esc | KeyCode::Enter => self.list.focus = ListFocus::Table,
                _ => {}
            }
            return;
        }

        let len = select_all_students(&self.snapshot).len();
        match key.code {
            KeyCode::Up => self.list.move_selection(-1, len),
            KeyCode::Down => self.list.move_selection(1, len),
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('/') | KeyCode::Tab => self.list.focus = ListFocus::FirstNameFilter,
            KeyCode::Char('a') => self.navigate(Route::AddStudent),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.list.selected_id(&self.snapshot) {
                    self.navigate(Route::EditStudent { id });
                }
            }
            KeyCode::Char('g') => {
                if let Some(student_id) = self.list.selected_id(&self.snapshot) {
                    self.navigate(Route::StudentGrades { student_id });
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.list.selected_id(&self.snapshot) {
                    let name = select_student_by_id(&self.snapshot, id)
                        .map(|student| student.full_name())
                        .unwrap_or_default();
                    self.ask_delete(
                        format!("Delete student {name} (#{id})?"),
                        DeleteTarget::Student(id),
                    );
                }
            }
            KeyCode::Char('s') => {
                self.list.filter.cycle_sort_by();
                self.list.mark_filter_changed(now);
            }
            KeyCode::Char('o') => {
                self.list.filter.toggle_sort_order();
                self.list.mark_filter_changed(now);
            }
            KeyCode::Char('r') => {
                self.list.filter.reset();
                self.list.mark_filter_changed(now);
            }
            KeyCode::F(5) => {
                let params = self.list.reload_params();
                self.load_students(params);
            }
            _ => {}
        }
    }

    fn on_student_form_key(&mut self, key: KeyEvent) {
        let Screen::StudentForm(view) = &mut self.screen else {
            return;
        };
        if key.code == KeyCode::Esc {
            self.navigate(Route::StudentList);
            return;
        }
        if view.awaiting().is_some() {
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => view.focus_next(true),
            KeyCode::BackTab | KeyCode::Up => view.focus_next(false),
            KeyCode::Char(ch) => view.focused_value_mut().push(ch),
            KeyCode::Backspace => {
                view.focused_value_mut().pop();
            }
            KeyCode::Enter => match view.form.submit() {
                Ok(intent) => {
                    view.errors.clear();
                    self.dispatch(intent);
                }
                Err(errors) => view.errors = errors,
            },
            _ => {}
        }
    }

    fn on_grades_key(&mut self, key: KeyEvent) {
        let Screen::StudentGrades(view) = &mut self.screen else {
            return;
        };
        let len = select_grades_by_student_id(&self.snapshot, view.student_id).len();
        if is_ctrl_char(key, 'e') {
            if let Some(grade) = view.selected_grade(&self.snapshot) {
                view.edit(grade);
            }
            return;
        }
        if is_ctrl_char(key, 'd') {
            let target = view
                .selected_grade(&self.snapshot)
                .map(|grade| (grade.id, grade.subject.clone()));
            if let Some((id, subject)) = target {
                self.ask_delete(
                    format!("Delete {subject} grade (#{id})?"),
                    DeleteTarget::Grade(id),
                );
            }
            return;
        }
        if is_ctrl_char(key, 'n') {
            view.reset_form();
            return;
        }
        match key.code {
            KeyCode::Up => view.move_selection(-1, len),
            KeyCode::Down => view.move_selection(1, len),
            KeyCode::Tab => view.focus_next(true),
            KeyCode::BackTab => view.focus_next(false),
            KeyCode::Char(ch) => view.focused_value_mut().push(ch),
            KeyCode::Backspace => {
                view.focused_value_mut().pop();
            }
            KeyCode::Enter => match view.form.submit() {
                Ok(intent) => {
                    view.reset_form();
                    self.dispatch(intent);
                }
                Err(errors) => view.errors = errors,
            },
            KeyCode::Esc => {
                if view.form_dirty() || !view.errors.is_empty() {
                    view.reset_form();
                } else {
                    self.navigate(Route::StudentList);
                }
            }
            KeyCode::F(5) => {
                let student_id = view.student_id;
                self.dispatch(GradeIntent::LoadByStudent { student_id });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;

    fn app_at(route: Route) -> (App, Store) {
        let store = Store::default();
        let app = App::with_today(
            store.clone(),
            Router::new(route),
            &UiConfig::default(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        (app, store)
    }

    #[test]
    fn list_route_loads_students_on_entry() {
        let (app, store) = app_at(Route::StudentList);
        assert!(store.state().students.loading);
        assert!(matches!(app.screen(), Screen::StudentList));
    }

    #[test]
    fn edit_form_fills_once_student_arrives() {
        let (mut app, store) = app_at(Route::EditStudent { id: 3 });
        store.dispatch(StudentIntent::LoadOneSucceeded {
            student: Student {
                id: 3,
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                group_name: "CS-1".into(),
            },
        });
        app.sync();
        match app.screen() {
            Screen::StudentForm(view) => {
                assert_eq!(view.awaiting(), None);
                assert_eq!(view.form.first_name, "Ada");
            }
            other => panic!("expected student form, got {:?}", other),
        }
    }
}
