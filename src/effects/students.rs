use std::sync::Arc;

use crate::api::StudentGateway;
use crate::model::{EntityId, LoadStudentsParams, NewStudent, Student};
use crate::store::student::StudentIntent;

use super::{instrumented, SliceEffect};

pub(super) fn handle(
    gateway: &Arc<dyn StudentGateway>,
    intent: &StudentIntent,
) -> Option<SliceEffect<StudentIntent>> {
    let gateway = Arc::clone(gateway);
    let effect = match intent.clone() {
        StudentIntent::Load { params } => {
            instrumented("students.load", load_students(gateway, params))
        }
        StudentIntent::LoadOne { id } => {
            instrumented("students.load_one", load_student(gateway, id))
        }
        StudentIntent::Add { student } => instrumented("students.add", add_student(gateway, student)),
        StudentIntent::Update { student } => {
            instrumented("students.update", update_student(gateway, student))
        }
        StudentIntent::Delete { id } => {
            instrumented("students.delete", delete_student(gateway, id))
        }
        _ => return None,
    };
    Some(effect)
}

async fn load_students(
    gateway: Arc<dyn StudentGateway>,
    params: LoadStudentsParams,
) -> StudentIntent {
    match gateway.list(&params).await {
        Ok(students) => {
            tracing::info!(count = students.len(), "Students loaded");
            StudentIntent::LoadSucceeded { students }
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to load students");
            StudentIntent::LoadFailed { error }
        }
    }
}

async fn load_student(gateway: Arc<dyn StudentGateway>, id: EntityId) -> StudentIntent {
    match gateway.get(id).await {
        Ok(student) => {
            tracing::info!(id, "Student loaded");
            StudentIntent::LoadOneSucceeded { student }
        }
        Err(error) => {
            tracing::error!(id, error = %error, "Failed to load student");
            StudentIntent::LoadOneFailed { error }
        }
    }
}

async fn add_student(gateway: Arc<dyn StudentGateway>, draft: NewStudent) -> StudentIntent {
    match gateway.create(&draft).await {
        Ok(student) => {
            tracing::info!(id = student.id, "Student added");
            StudentIntent::AddSucceeded { student }
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to add student");
            StudentIntent::AddFailed { error }
        }
    }
}

async fn update_student(gateway: Arc<dyn StudentGateway>, student: Student) -> StudentIntent {
    match gateway.update(&student).await {
        Ok(student) => {
            tracing::info!(id = student.id, "Student updated");
            StudentIntent::UpdateSucceeded { student }
        }
        Err(error) => {
            tracing::error!(id = student.id, error = %error, "Failed to update student");
            StudentIntent::UpdateFailed { error }
        }
    }
}

async fn delete_student(gateway: Arc<dyn StudentGateway>, id: EntityId) -> StudentIntent {
    match gateway.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "Student deleted");
            StudentIntent::DeleteSucceeded { id }
        }
        Err(error) => {
            tracing::error!(id, error = %error, "Failed to delete student");
            StudentIntent::DeleteFailed { error }
        }
    }
}
