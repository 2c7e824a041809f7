use crate::store::mvi::StoreState;

use super::intent::DeleteTarget;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Hidden,
    Visible {
        prompt: String,
        target: DeleteTarget,
    },
}

impl StoreState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn prompt(&self) -> Option<&str> {
        match self {
            Self::Visible { prompt, .. } => Some(prompt),
            Self::Hidden => None,
        }
    }

    pub fn target(&self) -> Option<DeleteTarget> {
        match self {
            Self::Visible { target, .. } => Some(*target),
            Self::Hidden => None,
        }
    }
}
