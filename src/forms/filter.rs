use crate::model::{LoadStudentsParams, SortField, SortOrder};

/// Filter/sort controls above the student list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentFilterForm {
    pub first_name_filter: String,
    pub last_name_filter: String,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl StudentFilterForm {
    /// Cycle the sort column: none → first name → last name → none.
    pub fn cycle_sort_by(&mut self) {
        self.sort_by = match self.sort_by {
            None => Some(SortField::FirstName),
            Some(SortField::FirstName) => Some(SortField::LastName),
            Some(SortField::LastName) => None,
        };
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Empty filters, no sort column, ascending.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_params(&self) -> LoadStudentsParams {
        LoadStudentsParams {
            first_name_filter: non_empty(&self.first_name_filter),
            last_name_filter: non_empty(&self.last_name_filter),
            sort_by: self.sort_by,
            sort_order: Some(self.sort_order),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
