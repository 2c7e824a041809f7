//! Form models backing the edit views.
//!
//! Forms hold raw text as typed by the user. `submit` validates presence and
//! numeric ranges and produces the intent to dispatch; an invalid form
//! produces no intent.

mod filter;
mod grade;
mod student;

pub use filter::StudentFilterForm;
pub use grade::{GradeForm, GradeField};
pub use student::{StudentField, StudentForm};

use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} must be a date like 2024-01-31")]
    InvalidDate { field: &'static str },
}

impl FormError {
    pub fn field(&self) -> &'static str {
        match self {
            FormError::Required { field }
            | FormError::NotANumber { field }
            | FormError::OutOfRange { field, .. }
            | FormError::InvalidDate { field } => field,
        }
    }
}

/// Trimmed value of a required text field, or a `Required` error.
fn required(field: &'static str, value: &str, errors: &mut Vec<FormError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FormError::Required { field });
    }
    trimmed.to_string()
}
