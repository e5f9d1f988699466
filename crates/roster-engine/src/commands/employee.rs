//! Employee handlers

use super::{at, render_listing, require_choices};
use crate::prompt::{Prompter, Question, Validation};
use crate::render::{Renderer, Row};
use roster_core::errors::{RosterError, Step};
use roster_core::model::{Employee, NewEmployee};
use roster_core::resolver::{resolve, resolve_manager, Candidates, NO_MANAGER};
use roster_core::{log_op_end, log_op_error, log_op_start};
use roster_store::errors::Result;
use roster_store::repo::listing;
use roster_store::SqliteRepo;
use rusqlite::Connection;

/// Ask for a name, a role and a manager, then add the employee
///
/// Manager choices are the existing employees followed by the
/// "no manager" option.
///
/// ## Errors
///
/// - `NoChoices`: there are no roles yet
/// - `InputClosed`: input ended at a prompt
/// - `ResolutionMismatch`: a chosen label is not among those fetched
/// - `Persistence` / `ConstraintViolation`: a query or the insert failed
pub fn create_employee(conn: &Connection, prompter: &mut impl Prompter) -> Result<Employee> {
    log_op_start!("employee_create");
    let start = std::time::Instant::now();

    let employee = create_employee_impl(conn, prompter).map_err(|e| {
        log_op_error!(
            "employee_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "employee_create",
        duration_ms = start.elapsed().as_millis() as u64,
        employee_id = employee.id,
        role_id = employee.role_id,
        manager_id = ?employee.manager_id
    );

    Ok(employee)
}

fn create_employee_impl(conn: &Connection, prompter: &mut impl Prompter) -> Result<Employee> {
    let roles = listing::list_roles(conn).map_err(at(Step::Fetch))?;
    let names = listing::list_employee_names(conn).map_err(at(Step::Fetch))?;
    require_choices(&roles, "roles")?;

    let role_candidates = Candidates::from_entries(&roles, &[]);
    let manager_candidates = Candidates::from_entries(&names, &[NO_MANAGER]);
    let mut manager_choices = manager_candidates.labels();
    manager_choices.push(NO_MANAGER.to_string());

    let answers = prompter.ask(&[
        Question::input("first_name", "First Name:", Validation::required("First Name")),
        Question::input("last_name", "Last Name:", Validation::required("Last Name")),
        Question::select("role", "Role within the company:", role_candidates.labels()),
        Question::select("manager", "Name of their manager:", manager_choices),
    ])?;

    let role_id = resolve(answers.require("role")?, role_candidates.as_slice())?;
    let manager_id = resolve_manager(answers.require("manager")?, manager_candidates.as_slice())?;

    let new = NewEmployee {
        first_name: answers.require("first_name")?.to_string(),
        last_name: answers.require("last_name")?.to_string(),
        role_id,
        manager_id,
    };
    SqliteRepo::insert_employee(conn, &new).map_err(at(Step::Persist))
}

/// Show every employee with the title and salary of their role
///
/// ## Errors
///
/// - `Persistence`: the query failed
/// - `Io`: writing the table failed
pub fn list_employees(conn: &Connection, renderer: &mut impl Renderer) -> Result<Vec<Row>> {
    log_op_start!("employee_list");
    let start = std::time::Instant::now();

    let rows = listing::employee_listing(conn)
        .map_err(at(Step::Fetch))
        .and_then(|employees| render_listing(&employees, renderer))
        .map_err(|e| {
            log_op_error!(
                "employee_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "employee_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = rows.len()
    );

    Ok(rows)
}

/// Ask for an employee and a role, then move the employee to that role
///
/// Only the chosen employee's row changes.
///
/// ## Errors
///
/// - `NoChoices`: there are no employees or no roles yet
/// - `InputClosed`: input ended at a prompt
/// - `ResolutionMismatch`: a chosen label is not among those fetched
/// - `NotFound` / `Persistence`: the update failed
pub fn reassign_employee_role(
    conn: &Connection,
    prompter: &mut impl Prompter,
) -> Result<Employee> {
    log_op_start!("employee_reassign_role");
    let start = std::time::Instant::now();

    let employee = reassign_employee_role_impl(conn, prompter).map_err(|e| {
        log_op_error!(
            "employee_reassign_role",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "employee_reassign_role",
        duration_ms = start.elapsed().as_millis() as u64,
        employee_id = employee.id,
        role_id = employee.role_id
    );

    Ok(employee)
}

fn reassign_employee_role_impl(
    conn: &Connection,
    prompter: &mut impl Prompter,
) -> Result<Employee> {
    let roles = listing::list_roles(conn).map_err(at(Step::Fetch))?;
    let names = listing::list_employee_names(conn).map_err(at(Step::Fetch))?;
    require_choices(&names, "employees")?;
    require_choices(&roles, "roles")?;

    let employee_candidates = Candidates::from_entries(&names, &[]);
    let role_candidates = Candidates::from_entries(&roles, &[]);

    let answers = prompter.ask(&[
        Question::select("employee", "Employee Name:", employee_candidates.labels()),
        Question::select("role", "New Role:", role_candidates.labels()),
    ])?;

    let employee_id = resolve(answers.require("employee")?, employee_candidates.as_slice())?;
    let role_id = resolve(answers.require("role")?, role_candidates.as_slice())?;

    SqliteRepo::update_employee_role(conn, employee_id, role_id).map_err(at(Step::Persist))?;
    SqliteRepo::get_employee(conn, employee_id)
        .map_err(at(Step::Persist))?
        .ok_or_else(|| at(Step::Persist)(RosterError::EmployeeNotFound { employee_id }.into()))
}
