use crate::model::EntityId;
use crate::store::mvi::Intent;

/// What a confirmed delete will remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Student(EntityId),
    Grade(EntityId),
}

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Open the dialog for `target`.
    Ask { prompt: String, target: DeleteTarget },
    /// User said yes. The caller reads the target before dispatching.
    Accept,
    /// User said no or pressed Escape.
    Dismiss,
}

impl Intent for ConfirmIntent {
    fn is_request(&self) -> bool {
        false
    }
}
