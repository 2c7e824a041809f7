//! Confirmation dialog gating destructive intents.

mod intent;
mod reducer;
mod state;

pub use intent::{ConfirmIntent, DeleteTarget};
pub use reducer::ConfirmReducer;
pub use state::ConfirmState;
