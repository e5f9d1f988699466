//! Read-only queries
//!
//! Reference lists (the rows a prompt offers as choices) and the three
//! listings shown as tables. Nothing here writes; running any of these twice
//! without an intervening write returns the same rows in the same order.

use crate::errors::{from_rusqlite, Result};
use roster_core::model::{
    Department, DepartmentBudget, EmployeeListing, EmployeeName, Role, RoleListing,
};
use rusqlite::{Connection, Row};

fn collect<T>(
    conn: &Connection,
    sql: &str,
    map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// All departments, by id
pub fn list_departments(conn: &Connection) -> Result<Vec<Department>> {
    collect(
        conn,
        "SELECT id, department_name FROM department ORDER BY id",
        |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
}

/// All roles, by id
pub fn list_roles(conn: &Connection) -> Result<Vec<Role>> {
    collect(
        conn,
        "SELECT id, title, salary, department_id FROM employee_role ORDER BY id",
        |row| {
            Ok(Role {
                id: row.get(0)?,
                title: row.get(1)?,
                salary: row.get(2)?,
                department_id: row.get(3)?,
            })
        },
    )
}

/// Employee ids with "first last" display names, ascending by name then id
pub fn list_employee_names(conn: &Connection) -> Result<Vec<EmployeeName>> {
    collect(
        conn,
        "SELECT id, first_name || ' ' || last_name AS full_name
         FROM employee
         ORDER BY full_name ASC, id ASC",
        |row| {
            Ok(EmployeeName {
                id: row.get(0)?,
                full_name: row.get(1)?,
            })
        },
    )
}

/// Salary total per department over the roles its employees hold
///
/// The join starts from `employee`, so departments nobody works in are
/// absent rather than listed with a zero budget.
pub fn department_budgets(conn: &Connection) -> Result<Vec<DepartmentBudget>> {
    collect(
        conn,
        "SELECT department.id,
                department.department_name,
                COALESCE(SUM(employee_role.salary), 0.0) AS utilized_budget
         FROM employee
         LEFT JOIN employee_role ON employee.role_id = employee_role.id
         LEFT JOIN department ON employee_role.department_id = department.id
         GROUP BY department.id, department.department_name
         ORDER BY department.id",
        |row| {
            Ok(DepartmentBudget {
                id: row.get(0)?,
                department_name: row.get(1)?,
                utilized_budget: row.get(2)?,
            })
        },
    )
}

/// Roles with their department name
pub fn role_listing(conn: &Connection) -> Result<Vec<RoleListing>> {
    collect(
        conn,
        "SELECT employee_role.id,
                employee_role.title,
                department.department_name AS department,
                employee_role.salary
         FROM employee_role
         LEFT JOIN department ON employee_role.department_id = department.id
         ORDER BY employee_role.id",
        |row| {
            Ok(RoleListing {
                id: row.get(0)?,
                title: row.get(1)?,
                department: row.get(2)?,
                salary: row.get(3)?,
            })
        },
    )
}

/// Employees with their role title and salary
pub fn employee_listing(conn: &Connection) -> Result<Vec<EmployeeListing>> {
    collect(
        conn,
        "SELECT employee.id,
                employee.first_name,
                employee.last_name,
                employee_role.title,
                employee_role.salary
         FROM employee
         LEFT JOIN employee_role ON employee_role.id = employee.role_id
         ORDER BY employee.id",
        |row| {
            Ok(EmployeeListing {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                title: row.get(3)?,
                salary: row.get(4)?,
            })
        },
    )
}
