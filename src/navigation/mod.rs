//! Client-side routing.
//!
//! The [`Router`] holds the current [`Route`]; views read it and navigate
//! through it. Redirects after successful saves are decided by
//! [`redirect_for`] and applied by a navigator task subscribed to the
//! store's intents, so effect handlers stay free of navigation.

mod route;

pub use route::Route;

use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::store::grade::GradeIntent;
use crate::store::student::StudentIntent;
use crate::store::{AppIntent, Store};

/// Current route, observable through a watch channel.
#[derive(Clone)]
pub struct Router {
    current: Arc<watch::Sender<Route>>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        let (current, _) = watch::channel(initial);
        Self {
            current: Arc::new(current),
        }
    }

    pub fn current(&self) -> Route {
        *self.current.borrow()
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "Navigating");
        self.current.send_replace(route);
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current.subscribe()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

/// Where to go after `intent`, if anywhere.
///
/// Successful adds and updates of either entity return to the student list.
pub fn redirect_for(intent: &AppIntent) -> Option<Route> {
    match intent {
        AppIntent::Students(StudentIntent::AddSucceeded { .. })
        | AppIntent::Students(StudentIntent::UpdateSucceeded { .. })
        | AppIntent::Grades(GradeIntent::AddSucceeded { .. })
        | AppIntent::Grades(GradeIntent::UpdateSucceeded { .. }) => Some(Route::StudentList),
        _ => None,
    }
}

/// Subscribe to the store's intents and apply [`redirect_for`] to the router.
///
/// Must be called from within a tokio runtime.
pub fn spawn_navigator(store: &Store, router: Router) -> JoinHandle<()> {
    let mut intents = store.intents();
    tokio::spawn(async move {
        loop {
            match intents.recv().await {
                Ok(intent) => {
                    if let Some(route) = redirect_for(&intent) {
                        router.navigate(route);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Navigator lagged; intents dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
