use crate::store::mvi::Reducer;

use super::intent::GradeIntent;
use super::GradesState;

pub struct GradeReducer;

impl Reducer for GradeReducer {
    type State = GradesState;
    type Intent = GradeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GradeIntent::LoadAll
            | GradeIntent::LoadByStudent { .. }
            | GradeIntent::LoadOne { .. }
            | GradeIntent::Add { .. }
            | GradeIntent::Update { .. }
            | GradeIntent::Delete { .. } => state.started(),

            GradeIntent::LoadSucceeded { grades } => {
                state.succeeded(|entities| entities.set_all(grades))
            }
            GradeIntent::LoadOneSucceeded { grade } | GradeIntent::UpdateSucceeded { grade } => {
                state.succeeded(|entities| entities.upsert_one(grade))
            }
            GradeIntent::AddSucceeded { grade } => {
                state.succeeded(|entities| entities.add_one(grade))
            }
            GradeIntent::DeleteSucceeded { id } => state.succeeded(|entities| {
                entities.remove_one(id);
            }),

            GradeIntent::LoadFailed { error }
            | GradeIntent::LoadOneFailed { error }
            | GradeIntent::AddFailed { error }
            | GradeIntent::UpdateFailed { error }
            | GradeIntent::DeleteFailed { error } => state.failed(error),
        }
    }
}
