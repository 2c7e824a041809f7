//! Effect pipeline: turns request intents into API calls and result intents.
//!
//! Every request intent is handled on its own task. Nothing is queued,
//! coalesced or retried; when two requests for the same collection race,
//! whichever result is dispatched last wins.

mod grades;
mod students;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::{ApiClient, ApiError, GradeGateway, StudentGateway};
use crate::store::grade::GradeIntent;
use crate::store::student::StudentIntent;
use crate::store::{AppIntent, AppState, Store};

/// A pending API call that resolves to the intent describing its outcome.
pub type EffectFuture = Pin<Box<dyn Future<Output = AppIntent> + Send + 'static>>;

type SliceEffect<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

#[derive(Clone)]
pub struct Effects {
    students: Arc<dyn StudentGateway>,
    grades: Arc<dyn GradeGateway>,
}

impl Effects {
    pub fn new(students: Arc<dyn StudentGateway>, grades: Arc<dyn GradeGateway>) -> Self {
        Self { students, grades }
    }

    /// Both gateways backed by one HTTP client.
    pub fn from_client(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }

    /// The API call answering `intent`, or `None` for result intents.
    pub fn handle(&self, intent: &AppIntent) -> Option<EffectFuture> {
        match intent {
            AppIntent::Students(intent) => {
                let effect = students::handle(&self.students, intent)?;
                Some(Box::pin(async move { AppIntent::Students(effect.await) }))
            }
            AppIntent::Grades(intent) => {
                let effect = grades::handle(&self.grades, intent)?;
                Some(Box::pin(async move { AppIntent::Grades(effect.await) }))
            }
        }
    }

    /// Subscribe to the store's intents and run every effect on the runtime.
    ///
    /// Must be called from within a tokio runtime. The subscription is taken
    /// before this returns, so intents dispatched afterwards are never missed.
    pub fn spawn(self, store: Store) -> JoinHandle<()> {
        let mut intents = store.intents();
        tokio::spawn(async move {
            loop {
                match intents.recv().await {
                    Ok(intent) => {
                        let Some(effect) = self.handle(&intent) else {
                            continue;
                        };
                        let store = store.clone();
                        tokio::spawn(async move {
                            let result = effect.await;
                            store.dispatch(result);
                        });
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            skipped,
                            "Effect pipeline lagged; failing collections left loading"
                        );
                        for intent in store.with_state(|state| lag_failures(state, skipped)) {
                            store.dispatch(intent);
                        }
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}

/// Failure intents for every collection still marked loading after
/// `skipped` request intents were dropped unanswered.
fn lag_failures(state: &AppState, skipped: u64) -> Vec<AppIntent> {
    let error = || ApiError::Network {
        detail: format!("{skipped} requests dropped before they were sent"),
    };
    let mut failures = Vec::new();
    if state.students.loading {
        failures.push(AppIntent::Students(StudentIntent::LoadFailed { error: error() }));
    }
    if state.grades.loading {
        failures.push(AppIntent::Grades(GradeIntent::LoadFailed { error: error() }));
    }
    failures
}

/// Box an effect and tag its logs with the operation and a fresh request id.
fn instrumented<T, F>(op: &'static str, effect: F) -> SliceEffect<T>
where
    F: Future<Output = T> + Send + 'static,
{
    let span = tracing::info_span!("effect", op, request_id = %Uuid::new_v4());
    Box::pin(effect.instrument(span))
}
