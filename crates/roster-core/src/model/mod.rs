pub mod department;
pub mod employee;
pub mod listing;
pub mod role;

pub use department::{Department, NewDepartment};
pub use employee::{Employee, EmployeeName, NewEmployee};
pub use listing::{DepartmentBudget, EmployeeListing, RoleListing};
pub use role::{NewRole, Role};
