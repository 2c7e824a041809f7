//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use chrono::NaiveDate;
use gradebook::api::ApiClient;
use gradebook::config::ApiConfig;
use gradebook::model::{EntityId, Grade, Student};
use gradebook::store::grade::GradeIntent;
use gradebook::store::student::StudentIntent;
use gradebook::store::{AppState, Store};
use std::time::Duration;

pub fn student(id: EntityId, first_name: &str, last_name: &str, group_name: &str) -> Student {
    Student {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        group_name: group_name.to_string(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn grade(id: EntityId, student_id: EntityId, subject: &str, score: f64) -> Grade {
    Grade {
        id,
        student_id,
        subject: subject.to_string(),
        score,
        grade_date: date(2024, 1, 10),
    }
}

/// Client pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("client should build")
}

/// Store pre-populated with students and grades via success intents.
pub fn seeded_store(students: Vec<Student>, grades: Vec<Grade>) -> Store {
    let store = Store::default();
    store.dispatch(StudentIntent::LoadSucceeded { students });
    store.dispatch(GradeIntent::LoadSucceeded { grades });
    store
}

/// Poll `store` until `predicate` holds or `timeout` elapses.
pub async fn wait_for_state(
    store: &Store,
    timeout: Duration,
    predicate: impl Fn(&AppState) -> bool,
) -> bool {
    let mut rx = store.subscribe();
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if predicate(&rx.borrow_and_update()) {
            return true;
        }
        match tokio::time::timeout_at(deadline, rx.changed()).await {
            Ok(Ok(())) => continue,
            _ => return false,
        }
    }
}
