//! Terminal front end: screens per route, a delete confirmation dialog and
//! the event loop tying them to the store.

pub mod app;
pub mod confirm;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

pub use runtime::run;
