use crate::model::{EntityId, NewStudent, Student};
use crate::store::student::StudentIntent;

use super::{required, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    GroupName,
}

impl StudentField {
    pub const ALL: [StudentField; 3] = [
        StudentField::FirstName,
        StudentField::LastName,
        StudentField::GroupName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudentField::FirstName => "First name",
            StudentField::LastName => "Last name",
            StudentField::GroupName => "Group",
        }
    }
}

/// Add/edit form for one student. `id` is set in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentForm {
    pub id: Option<EntityId>,
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
}

impl StudentForm {
    /// Empty form for creating a student.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing student (edit mode).
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: Some(student.id),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            group_name: student.group_name.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::GroupName => &self.group_name,
        }
    }

    pub fn value_mut(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::FirstName => &mut self.first_name,
            StudentField::LastName => &mut self.last_name,
            StudentField::GroupName => &mut self.group_name,
        }
    }

    /// Validate and build `Add` (no id) or `Update` (edit mode).
    pub fn submit(&self) -> Result<StudentIntent, Vec<FormError>> {
        let mut errors = Vec::new();
        let first_name = required(StudentField::FirstName.label(), &self.first_name, &mut errors);
        let last_name = required(StudentField::LastName.label(), &self.last_name, &mut errors);
        let group_name = required(StudentField::GroupName.label(), &self.group_name, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        let draft = NewStudent {
            first_name,
            last_name,
            group_name,
        };
        Ok(match self.id {
            Some(id) => StudentIntent::Update {
                student: draft.with_id(id),
            },
            None => StudentIntent::Add { student: draft },
        })
    }
}
