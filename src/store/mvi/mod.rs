//! Model-View-Intent (MVI) primitives for the client-side store.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effects ───────┤
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot of everything the views render
//! - **Intent**: A request from the view, or the result of an API call
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
