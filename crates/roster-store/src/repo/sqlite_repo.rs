//! SQLite repository implementation
//!
//! Every write re-checks the rules the prompts enforce, so callers that do
//! not go through the prompts get the same guarantees.

use crate::errors::{from_rusqlite, Result};
use roster_core::errors::RosterError;
use roster_core::model::{Department, Employee, NewDepartment, NewEmployee, NewRole, Role};
use roster_core::rules::{validate_required, validate_salary};
use rusqlite::{params, Connection, OptionalExtension};

/// SQLite repository for departments, roles and employees
pub struct SqliteRepo;

impl SqliteRepo {
    /// Persist a new Department
    ///
    /// The stored name is trimmed.
    ///
    /// # Errors
    /// * `InvalidInput` - If the name is empty
    pub fn insert_department(conn: &Connection, new: &NewDepartment) -> Result<Department> {
        validate_required("Department name", &new.name)?;
        let name = new.name.trim();

        conn.execute(
            "INSERT INTO department (department_name) VALUES (?1)",
            params![name],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(department_id = id, "department inserted");
        Ok(Department {
            id,
            name: name.to_string(),
        })
    }

    /// Persist a new Role under an existing Department
    ///
    /// # Errors
    /// * `InvalidInput` - If the title is empty or the salary is not a non-negative number
    /// * `NotFound` - If the department does not exist
    pub fn insert_role(conn: &Connection, new: &NewRole) -> Result<Role> {
        validate_required("Role title", &new.title)?;
        validate_salary(new.salary)?;
        if Self::get_department(conn, new.department_id)?.is_none() {
            return Err(RosterError::DepartmentNotFound {
                department_id: new.department_id,
            }
            .into());
        }
        let title = new.title.trim();

        conn.execute(
            "INSERT INTO employee_role (title, salary, department_id) VALUES (?1, ?2, ?3)",
            params![title, new.salary, new.department_id],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(role_id = id, department_id = new.department_id, "role inserted");
        Ok(Role {
            id,
            title: title.to_string(),
            salary: new.salary,
            department_id: new.department_id,
        })
    }

    /// Persist a new Employee holding an existing Role
    ///
    /// # Errors
    /// * `InvalidInput` - If either name is empty
    /// * `NotFound` - If the role or the manager does not exist
    pub fn insert_employee(conn: &Connection, new: &NewEmployee) -> Result<Employee> {
        validate_required("First name", &new.first_name)?;
        validate_required("Last name", &new.last_name)?;
        if Self::get_role(conn, new.role_id)?.is_none() {
            return Err(RosterError::RoleNotFound {
                role_id: new.role_id,
            }
            .into());
        }
        if let Some(manager_id) = new.manager_id {
            if Self::get_employee(conn, manager_id)?.is_none() {
                return Err(RosterError::ManagerNotFound { manager_id }.into());
            }
        }
        let first_name = new.first_name.trim();
        let last_name = new.last_name.trim();

        conn.execute(
            "INSERT INTO employee (first_name, last_name, role_id, manager_id)
             VALUES (?1, ?2, ?3, ?4)",
            params![first_name, last_name, new.role_id, new.manager_id],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(employee_id = id, role_id = new.role_id, "employee inserted");
        Ok(Employee {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role_id: new.role_id,
            manager_id: new.manager_id,
        })
    }

    /// Point an existing Employee at a different Role
    ///
    /// Touches exactly one row.
    ///
    /// # Errors
    /// * `NotFound` - If the role or the employee does not exist
    pub fn update_employee_role(conn: &Connection, employee_id: i64, role_id: i64) -> Result<()> {
        if Self::get_role(conn, role_id)?.is_none() {
            return Err(RosterError::RoleNotFound { role_id }.into());
        }

        let affected = conn
            .execute(
                "UPDATE employee SET role_id = ?1 WHERE id = ?2",
                params![role_id, employee_id],
            )
            .map_err(from_rusqlite)?;

        if affected == 0 {
            return Err(RosterError::EmployeeNotFound { employee_id }.into());
        }
        tracing::debug!(employee_id, role_id, "employee role updated");
        Ok(())
    }

    /// Get a Department by id
    pub fn get_department(conn: &Connection, department_id: i64) -> Result<Option<Department>> {
        conn.query_row(
            "SELECT id, department_name FROM department WHERE id = ?1",
            [department_id],
            |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a Role by id
    pub fn get_role(conn: &Connection, role_id: i64) -> Result<Option<Role>> {
        conn.query_row(
            "SELECT id, title, salary, department_id FROM employee_role WHERE id = ?1",
            [role_id],
            |row| {
                Ok(Role {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    salary: row.get(2)?,
                    department_id: row.get(3)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get an Employee by id
    pub fn get_employee(conn: &Connection, employee_id: i64) -> Result<Option<Employee>> {
        conn.query_row(
            "SELECT id, first_name, last_name, role_id, manager_id FROM employee WHERE id = ?1",
            [employee_id],
            |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    role_id: row.get(3)?,
                    manager_id: row.get(4)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db, migrations};
    use roster_core::errors::ExErrorKind;

    fn setup() -> Connection {
        let mut conn = db::open_in_memory().unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_department_trims_name() {
        let conn = setup();
        let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("  Sales ")).unwrap();
        assert_eq!(dept.name, "Sales");
        assert_eq!(
            SqliteRepo::get_department(&conn, dept.id).unwrap(),
            Some(dept)
        );
    }

    #[test]
    fn test_get_missing_rows_is_none() {
        let conn = setup();
        assert!(SqliteRepo::get_department(&conn, 1).unwrap().is_none());
        assert!(SqliteRepo::get_role(&conn, 1).unwrap().is_none());
        assert!(SqliteRepo::get_employee(&conn, 1).unwrap().is_none());
    }

    #[test]
    fn test_insert_role_with_negative_salary_is_rejected() {
        let conn = setup();
        let dept = SqliteRepo::insert_department(&conn, &NewDepartment::new("Ops")).unwrap();
        let err = SqliteRepo::insert_role(
            &conn,
            &NewRole {
                title: "Operator".to_string(),
                salary: -1.0,
                department_id: dept.id,
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
