use std::sync::Arc;

use crate::api::GradeGateway;
use crate::model::{EntityId, Grade, NewGrade};
use crate::store::grade::GradeIntent;

use super::{instrumented, SliceEffect};

pub(super) fn handle(
    gateway: &Arc<dyn GradeGateway>,
    intent: &GradeIntent,
) -> Option<SliceEffect<GradeIntent>> {
    let gateway = Arc::clone(gateway);
    let effect = match intent.clone() {
        GradeIntent::LoadAll => instrumented("grades.load_all", load_all_grades(gateway)),
        GradeIntent::LoadByStudent { student_id } => instrumented(
            "grades.load_by_student",
            load_grades_for_student(gateway, student_id),
        ),
        GradeIntent::LoadOne { id } => instrumented("grades.load_one", load_grade(gateway, id)),
        GradeIntent::Add { grade } => instrumented("grades.add", add_grade(gateway, grade)),
        GradeIntent::Update { grade } => instrumented("grades.update", update_grade(gateway, grade)),
        GradeIntent::Delete { id } => instrumented("grades.delete", delete_grade(gateway, id)),
        _ => return None,
    };
    Some(effect)
}

async fn load_all_grades(gateway: Arc<dyn GradeGateway>) -> GradeIntent {
    match gateway.list().await {
        Ok(grades) => {
            tracing::info!(count = grades.len(), "Grades loaded");
            GradeIntent::LoadSucceeded { grades }
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to load grades");
            GradeIntent::LoadFailed { error }
        }
    }
}

async fn load_grades_for_student(
    gateway: Arc<dyn GradeGateway>,
    student_id: EntityId,
) -> GradeIntent {
    match gateway.list_for_student(student_id).await {
        Ok(grades) => {
            tracing::info!(student_id, count = grades.len(), "Grades loaded for student");
            GradeIntent::LoadSucceeded { grades }
        }
        Err(error) => {
            tracing::error!(student_id, error = %error, "Failed to load grades for student");
            GradeIntent::LoadFailed { error }
        }
    }
}

async fn load_grade(gateway: Arc<dyn GradeGateway>, id: EntityId) -> GradeIntent {
    match gateway.get(id).await {
        Ok(grade) => {
            tracing::info!(id, "Grade loaded");
            GradeIntent::LoadOneSucceeded { grade }
        }
        Err(error) => {
            tracing::error!(id, error = %error, "Failed to load grade");
            GradeIntent::LoadOneFailed { error }
        }
    }
}

async fn add_grade(gateway: Arc<dyn GradeGateway>, draft: NewGrade) -> GradeIntent {
    let student_id = draft.student_id;
    match gateway.create(&draft).await {
        Ok(grade) => {
            tracing::info!(id = grade.id, student_id = grade.student_id, "Grade added");
            GradeIntent::AddSucceeded { grade }
        }
        Err(error) => {
            tracing::error!(student_id, error = %error, "Failed to add grade");
            GradeIntent::AddFailed { error }
        }
    }
}

async fn update_grade(gateway: Arc<dyn GradeGateway>, grade: Grade) -> GradeIntent {
    match gateway.update(&grade).await {
        Ok(grade) => {
            tracing::info!(id = grade.id, "Grade updated");
            GradeIntent::UpdateSucceeded { grade }
        }
        Err(error) => {
            tracing::error!(id = grade.id, error = %error, "Failed to update grade");
            GradeIntent::UpdateFailed { error }
        }
    }
}

async fn delete_grade(gateway: Arc<dyn GradeGateway>, id: EntityId) -> GradeIntent {
    tracing::debug!(id, "Deleting grade");
    match gateway.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "Grade deleted");
            GradeIntent::DeleteSucceeded { id }
        }
        Err(error) => {
            tracing::error!(id, error = %error, "Failed to delete grade");
            GradeIntent::DeleteFailed { error }
        }
    }
}
