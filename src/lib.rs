//! Terminal client for a student and grade management REST service.

pub mod api;
pub mod config;
pub mod effects;
pub mod forms;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod store;
pub mod ui;
