mod common;

use common::{date, grade};
use gradebook::api::ApiError;
use gradebook::model::NewGrade;
use gradebook::store::grade::{GradeIntent, GradeReducer, GradesState};
use gradebook::store::mvi::Reducer;

fn loaded() -> GradesState {
    GradeReducer::reduce(
        GradesState::default(),
        GradeIntent::LoadSucceeded {
            grades: vec![grade(1, 4, "Math", 90.0), grade(2, 7, "Art", 70.0)],
        },
    )
}

#[test]
fn every_request_sets_loading() {
    let requests = vec![
        GradeIntent::LoadAll,
        GradeIntent::LoadByStudent { student_id: 4 },
        GradeIntent::LoadOne { id: 1 },
        GradeIntent::Add {
            grade: NewGrade {
                student_id: 4,
                subject: "Math".into(),
                score: 95.0,
                grade_date: date(2024, 1, 10),
            },
        },
        GradeIntent::Update {
            grade: grade(1, 4, "Math", 91.0),
        },
        GradeIntent::Delete { id: 1 },
    ];
    for intent in requests {
        let state = GradeReducer::reduce(loaded(), intent.clone());
        assert!(state.loading, "{:?} should set loading", intent);
        assert_eq!(state.entities, loaded().entities, "{:?} changed entities", intent);
    }
}

#[test]
fn load_by_student_replaces_whole_collection() {
    let state = GradeReducer::reduce(
        loaded(),
        GradeIntent::LoadSucceeded {
            grades: vec![grade(5, 4, "Physics", 60.0)],
        },
    );
    assert_eq!(state.entities.ids(), &[5]);
}

#[test]
fn add_succeeded_stores_server_id() {
    let state = GradeReducer::reduce(
        loaded(),
        GradeIntent::AddSucceeded {
            grade: grade(31, 4, "Math", 95.0),
        },
    );
    assert_eq!(state.entities.get(31).unwrap().score, 95.0);
    assert_eq!(state.entities.len(), 3);
}

#[test]
fn update_and_load_one_upsert() {
    let state = GradeReducer::reduce(
        loaded(),
        GradeIntent::UpdateSucceeded {
            grade: grade(2, 7, "Art", 75.0),
        },
    );
    assert_eq!(state.entities.get(2).unwrap().score, 75.0);

    let state = GradeReducer::reduce(
        state,
        GradeIntent::LoadOneSucceeded {
            grade: grade(8, 7, "Music", 88.0),
        },
    );
    assert_eq!(state.entities.ids(), &[1, 2, 8]);
}

#[test]
fn delete_succeeded_removes_grade() {
    let state = GradeReducer::reduce(loaded(), GradeIntent::DeleteSucceeded { id: 1 });
    assert!(!state.entities.contains(1));
    assert!(state.entities.contains(2));
}

#[test]
fn failures_record_error_and_keep_data() {
    let error = ApiError::from_status(500, "boom");
    let state = GradeReducer::reduce(loaded(), GradeIntent::LoadAll);
    let state = GradeReducer::reduce(state, GradeIntent::LoadFailed { error: error.clone() });
    assert!(!state.loading);
    assert_eq!(state.error, Some(error));
    assert_eq!(state.entities.len(), 2);
}
