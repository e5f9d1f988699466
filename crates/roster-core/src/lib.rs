//! Roster Core - domain model and rules for the roster workflow engine
//!
//! This crate provides the storage-independent parts of the tool:
//! - Department, Role and Employee models plus the read shapes used by listings
//! - Validation rules shared by the prompts and the store
//! - The reference resolver that maps a chosen label back to its row id
//! - The structured error facility (`ExError`) and the logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod resolver;
pub mod rules;

// Macros expand to `$crate::roster_core_types::...`
pub use roster_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, RosterError, Step};
pub use model::{
    Department, DepartmentBudget, Employee, EmployeeListing, EmployeeName, NewDepartment,
    NewEmployee, NewRole, Role, RoleListing,
};
pub use resolver::{Candidate, Candidates, Labelled, NO_MANAGER};
