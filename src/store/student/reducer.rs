use crate::store::mvi::Reducer;

use super::intent::StudentIntent;
use super::StudentsState;

pub struct StudentReducer;

impl Reducer for StudentReducer {
    type State = StudentsState;
    type Intent = StudentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudentIntent::Load { .. }
            | StudentIntent::LoadOne { .. }
            | StudentIntent::Add { .. }
            | StudentIntent::Update { .. }
            | StudentIntent::Delete { .. } => state.started(),

            StudentIntent::LoadSucceeded { students } => {
                state.succeeded(|entities| entities.set_all(students))
            }
            StudentIntent::LoadOneSucceeded { student }
            | StudentIntent::UpdateSucceeded { student } => {
                state.succeeded(|entities| entities.upsert_one(student))
            }
            StudentIntent::AddSucceeded { student } => {
                state.succeeded(|entities| entities.add_one(student))
            }
            StudentIntent::DeleteSucceeded { id } => state.succeeded(|entities| {
                entities.remove_one(id);
            }),

            StudentIntent::LoadFailed { error }
            | StudentIntent::LoadOneFailed { error }
            | StudentIntent::AddFailed { error }
            | StudentIntent::UpdateFailed { error }
            | StudentIntent::DeleteFailed { error } => state.failed(error),
        }
    }
}
