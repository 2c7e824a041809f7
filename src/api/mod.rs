//! REST gateway client for the student and grade resources.
//!
//! The effect pipeline talks to the backend only through the
//! [`StudentGateway`] and [`GradeGateway`] traits; [`ApiClient`] implements
//! both over `reqwest`.

mod client;
mod error;
mod grades;
mod students;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind};
pub use grades::GradeGateway;
pub use students::StudentGateway;
