//! Student collection: intents, reducer, selectors.

mod intent;
mod reducer;
mod selectors;

pub use intent::StudentIntent;
pub use reducer::StudentReducer;
pub use selectors::{
    select_all_students, select_student_by_id, select_students_error, select_students_loading,
};

use crate::model::Student;
use crate::store::entity::CollectionState;

pub type StudentsState = CollectionState<Student>;
