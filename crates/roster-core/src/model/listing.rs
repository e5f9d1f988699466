//! Read shapes produced by the listing queries
//!
//! Field names double as table column headers, so they follow the column
//! aliases of the underlying queries.

use serde::{Deserialize, Serialize};

/// One row of the department listing: salary total of staffed roles
///
/// Built by joining from employees outward, so a department without
/// employees never produces a row. The id and name are optional because the
/// joins are outer joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentBudget {
    pub id: Option<i64>,
    pub department_name: Option<String>,
    pub utilized_budget: f64,
}

/// One row of the role listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    /// Department name; None if the department row is missing
    pub department: Option<String>,
    pub salary: f64,
}

/// One row of the employee listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub salary: Option<f64>,
}
