use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
}

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A student draft that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub group_name: String,
}

impl NewStudent {
    pub fn with_id(self, id: EntityId) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            group_name: self.group_name,
        }
    }
}

/// Column the backend can sort the student list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FirstName,
    LastName,
}

impl SortField {
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::FirstName => "firstName",
            SortField::LastName => "lastName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::FirstName => "First name",
            SortField::LastName => "Last name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Filter and sort options for loading the student list.
///
/// Empty filters are treated as absent and never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadStudentsParams {
    pub first_name_filter: Option<String>,
    pub last_name_filter: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl LoadStudentsParams {
    /// Query pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = non_empty(&self.first_name_filter) {
            pairs.push(("firstNameFilter", filter.to_string()));
        }
        if let Some(filter) = non_empty(&self.last_name_filter) {
            pairs.push(("lastNameFilter", filter.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_param().to_string()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_param().to_string()));
        }
        pairs
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
