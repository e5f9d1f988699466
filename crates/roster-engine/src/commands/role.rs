//! Role handlers

use super::{at, render_listing, require_choices};
use crate::prompt::{Prompter, Question, Validation};
use crate::render::{Renderer, Row};
use roster_core::errors::{ExError, Step};
use roster_core::model::{NewRole, Role};
use roster_core::resolver::{resolve, Candidates};
use roster_core::rules::parse_salary;
use roster_core::{log_op_end, log_op_error, log_op_start};
use roster_store::errors::Result;
use roster_store::repo::listing;
use roster_store::SqliteRepo;
use rusqlite::Connection;

/// Ask for a title, a salary and a department, then add the role
///
/// The department choices are the departments fetched by this call.
///
/// ## Errors
///
/// - `NoChoices`: there are no departments yet
/// - `InputClosed`: input ended at a prompt
/// - `ResolutionMismatch`: the chosen department is not among those fetched
/// - `Persistence` / `ConstraintViolation`: a query or the insert failed
pub fn create_role(conn: &Connection, prompter: &mut impl Prompter) -> Result<Role> {
    log_op_start!("role_create");
    let start = std::time::Instant::now();

    let role = create_role_impl(conn, prompter).map_err(|e| {
        log_op_error!(
            "role_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "role_create",
        duration_ms = start.elapsed().as_millis() as u64,
        role_id = role.id,
        department_id = role.department_id
    );

    Ok(role)
}

fn create_role_impl(conn: &Connection, prompter: &mut impl Prompter) -> Result<Role> {
    let departments = listing::list_departments(conn).map_err(at(Step::Fetch))?;
    require_choices(&departments, "departments")?;
    let candidates = Candidates::from_entries(&departments, &[]);

    let answers = prompter.ask(&[
        Question::input("role", "Add Employee Role:", Validation::required("Employee Role")),
        Question::input("salary", "Employee Role Salary:", Validation::Salary),
        Question::select("department", "Department for this Role:", candidates.labels()),
    ])?;

    let salary = parse_salary(answers.require("salary")?)
        .map_err(|e| ExError::from(e).with_step(Step::Prompt))?;
    let department_id = resolve(answers.require("department")?, candidates.as_slice())?;

    let new = NewRole {
        title: answers.require("role")?.to_string(),
        salary,
        department_id,
    };
    SqliteRepo::insert_role(conn, &new).map_err(at(Step::Persist))
}

/// Show every role with its department name and salary
///
/// ## Errors
///
/// - `Persistence`: the query failed
/// - `Io`: writing the table failed
pub fn list_roles(conn: &Connection, renderer: &mut impl Renderer) -> Result<Vec<Row>> {
    log_op_start!("role_list");
    let start = std::time::Instant::now();

    let rows = listing::role_listing(conn)
        .map_err(at(Step::Fetch))
        .and_then(|roles| render_listing(&roles, renderer))
        .map_err(|e| {
            log_op_error!(
                "role_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "role_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = rows.len()
    );

    Ok(rows)
}
