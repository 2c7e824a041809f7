//! Process-wide state container.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};

use crate::store::mvi::{Intent, Reducer};
use crate::store::{AppIntent, AppReducer, AppState};

/// Buffered intents per subscriber before it starts lagging.
const INTENT_CHANNEL_CAPACITY: usize = 256;

/// Shared handle to the application state.
///
/// Cloning is cheap; all clones see the same state. State is published
/// through a `watch` channel and every dispatched intent is re-broadcast to
/// intent subscribers (effects, navigator) after the reducer has run.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<AppState>,
    intents: broadcast::Sender<AppIntent>,
    /// Keeps reduce + broadcast atomic so subscribers see intents in reducer order.
    dispatch_lock: Mutex<()>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        let (intents, _) = broadcast::channel(INTENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                state,
                intents,
                dispatch_lock: Mutex::new(()),
            }),
        }
    }

    /// Apply an intent to the state and notify subscribers.
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        tracing::debug!(request = intent.is_request(), intent = ?intent, "Dispatching intent");

        let _guard = self.inner.dispatch_lock.lock();
        let for_reducer = intent.clone();
        self.inner.state.send_modify(|state| {
            *state = AppReducer::reduce(std::mem::take(state), for_reducer);
        });
        // No subscribers is fine: nothing is listening for side effects.
        let _ = self.inner.intents.send(intent);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Receiver for every intent dispatched from now on.
    pub fn intents(&self) -> broadcast::Receiver<AppIntent> {
        self.inner.intents.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
