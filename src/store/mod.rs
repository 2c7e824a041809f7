//! Normalized client-side store.
//!
//! Two independent collections (students, grades), each with a loading flag
//! and the last error. State changes only through [`AppReducer`], applied by
//! [`Store::dispatch`].

pub mod entity;
pub mod grade;
pub mod mvi;
pub mod student;

mod container;

pub use container::Store;
pub use entity::{CollectionState, EntityCollection};

use crate::store::grade::{GradeIntent, GradeReducer, GradesState};
use crate::store::mvi::{Intent, Reducer, StoreState};
use crate::store::student::{StudentIntent, StudentReducer, StudentsState};

/// Root state: one slice per entity type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub students: StudentsState,
    pub grades: GradesState,
}

impl StoreState for AppState {}

/// Any intent the store accepts, tagged by the slice it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    Students(StudentIntent),
    Grades(GradeIntent),
}

impl Intent for AppIntent {
    fn is_request(&self) -> bool {
        match self {
            AppIntent::Students(intent) => intent.is_request(),
            AppIntent::Grades(intent) => intent.is_request(),
        }
    }
}

impl From<StudentIntent> for AppIntent {
    fn from(intent: StudentIntent) -> Self {
        AppIntent::Students(intent)
    }
}

impl From<GradeIntent> for AppIntent {
    fn from(intent: GradeIntent) -> Self {
        AppIntent::Grades(intent)
    }
}

/// Routes each intent to its slice reducer; the other slice is untouched.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AppState { students, grades } = state;
        match intent {
            AppIntent::Students(intent) => AppState {
                students: StudentReducer::reduce(students, intent),
                grades,
            },
            AppIntent::Grades(intent) => AppState {
                students,
                grades: GradeReducer::reduce(grades, intent),
            },
        }
    }
}
