use crate::api::ApiError;
use crate::model::{EntityId, Student};
use crate::store::AppState;

pub fn select_all_students(state: &AppState) -> Vec<&Student> {
    state.students.entities.all().collect()
}

pub fn select_student_by_id(state: &AppState, id: EntityId) -> Option<&Student> {
    state.students.entities.get(id)
}

pub fn select_students_loading(state: &AppState) -> bool {
    state.students.loading
}

pub fn select_students_error(state: &AppState) -> Option<&ApiError> {
    state.students.error.as_ref()
}
