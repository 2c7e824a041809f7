use crate::api::ApiError;
use crate::model::{EntityId, Grade};
use crate::store::AppState;

pub fn select_all_grades(state: &AppState) -> Vec<&Grade> {
    state.grades.entities.all().collect()
}

pub fn select_grade_by_id(state: &AppState, id: EntityId) -> Option<&Grade> {
    state.grades.entities.get(id)
}

/// Grades belonging to one student, in collection order.
///
/// Linear scan over every loaded grade.
pub fn select_grades_by_student_id(state: &AppState, student_id: EntityId) -> Vec<&Grade> {
    state
        .grades
        .entities
        .all()
        .filter(|grade| grade.student_id == student_id)
        .collect()
}

pub fn select_grades_loading(state: &AppState) -> bool {
    state.grades.loading
}

pub fn select_grades_error(state: &AppState) -> Option<&ApiError> {
    state.grades.error.as_ref()
}
