//! Grade collection: intents, reducer, selectors.

mod intent;
mod reducer;
mod selectors;

pub use intent::GradeIntent;
pub use reducer::GradeReducer;
pub use selectors::{
    select_all_grades, select_grade_by_id, select_grades_by_student_id, select_grades_error,
    select_grades_loading,
};

use crate::model::Grade;
use crate::store::entity::CollectionState;

pub type GradesState = CollectionState<Grade>;
