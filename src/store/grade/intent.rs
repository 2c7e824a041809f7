use crate::api::ApiError;
use crate::model::{EntityId, Grade, NewGrade};
use crate::store::mvi::Intent;

/// Requests issued by the grade views and the results that answer them.
///
/// Both bulk loads answer with `LoadSucceeded`, which replaces the whole
/// grade collection.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeIntent {
    LoadAll,
    LoadByStudent { student_id: EntityId },
    LoadSucceeded { grades: Vec<Grade> },
    LoadFailed { error: ApiError },

    LoadOne { id: EntityId },
    LoadOneSucceeded { grade: Grade },
    LoadOneFailed { error: ApiError },

    Add { grade: NewGrade },
    AddSucceeded { grade: Grade },
    AddFailed { error: ApiError },

    Update { grade: Grade },
    UpdateSucceeded { grade: Grade },
    UpdateFailed { error: ApiError },

    Delete { id: EntityId },
    DeleteSucceeded { id: EntityId },
    DeleteFailed { error: ApiError },
}

impl Intent for GradeIntent {
    fn is_request(&self) -> bool {
        matches!(
            self,
            GradeIntent::LoadAll
                | GradeIntent::LoadByStudent { .. }
                | GradeIntent::LoadOne { .. }
                | GradeIntent::Add { .. }
                | GradeIntent::Update { .. }
                | GradeIntent::Delete { .. }
        )
    }
}
