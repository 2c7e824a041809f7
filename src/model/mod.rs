//! Entity records exchanged with the REST backend.

mod grade;
mod student;

pub use grade::{Grade, NewGrade};
pub use student::{LoadStudentsParams, NewStudent, SortField, SortOrder, Student};

/// Server-assigned entity identifier.
pub type EntityId = i64;

/// An entity that can live in a normalized collection.
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> EntityId;
}
