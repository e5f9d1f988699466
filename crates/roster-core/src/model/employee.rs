use serde::{Deserialize, Serialize};

/// Employee - a person holding exactly one Role, optionally reporting to a manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Row id assigned by the store
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Current role; changed only by reassignment
    pub role_id: i64,

    /// Another employee's id, or None when the employee has no manager
    pub manager_id: Option<i64>,
}

impl Employee {
    /// Display name: first and last name separated by one space
    ///
    /// Not unique; two employees may share it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert payload for an Employee
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// Id plus display name, as fetched for the employee and manager prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeName {
    pub id: i64,
    pub full_name: String,
}
