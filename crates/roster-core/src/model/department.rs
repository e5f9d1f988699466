use serde::{Deserialize, Serialize};

/// Department - top-level organizational grouping owning one or more Roles
///
/// Departments are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Row id assigned by the store
    pub id: i64,

    /// Display name (non-empty)
    #[serde(rename = "department_name")]
    pub name: String,
}

/// Insert payload for a Department
#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
