use crate::api::ApiError;
use crate::model::{EntityId, LoadStudentsParams, NewStudent, Student};
use crate::store::mvi::Intent;

/// Requests issued by the student views and the results that answer them.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentIntent {
    Load { params: LoadStudentsParams },
    LoadSucceeded { students: Vec<Student> },
    LoadFailed { error: ApiError },

    /// Fetch one student, e.g. to fill the edit form.
    LoadOne { id: EntityId },
    LoadOneSucceeded { student: Student },
    LoadOneFailed { error: ApiError },

    Add { student: NewStudent },
    AddSucceeded { student: Student },
    AddFailed { error: ApiError },

    Update { student: Student },
    UpdateSucceeded { student: Student },
    UpdateFailed { error: ApiError },

    Delete { id: EntityId },
    DeleteSucceeded { id: EntityId },
    DeleteFailed { error: ApiError },
}

impl Intent for StudentIntent {
    fn is_request(&self) -> bool {
        matches!(
            self,
            StudentIntent::Load { .. }
                | StudentIntent::LoadOne { .. }
                | StudentIntent::Add { .. }
                | StudentIntent::Update { .. }
                | StudentIntent::Delete { .. }
        )
    }
}
