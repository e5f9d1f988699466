use serde::{Deserialize, Serialize};

/// Role - a job title with a salary, belonging to exactly one Department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Row id assigned by the store
    pub id: i64,

    /// Job title (non-empty)
    pub title: String,

    /// Salary paid to every holder of this role
    pub salary: f64,

    /// Owning department
    pub department_id: i64,
}

/// Insert payload for a Role
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}
