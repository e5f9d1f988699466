//! Department handlers

use super::{at, render_listing};
use crate::prompt::{Prompter, Question, Validation};
use crate::render::{Renderer, Row};
use roster_core::errors::Step;
use roster_core::model::{Department, NewDepartment};
use roster_core::{log_op_end, log_op_error, log_op_start};
use roster_store::errors::Result;
use roster_store::repo::listing;
use roster_store::SqliteRepo;
use rusqlite::Connection;

/// Ask for a department name and add the department
///
/// ## Errors
///
/// - `InputClosed`: input ended at the prompt
/// - `Persistence` / `ConstraintViolation`: the insert failed
pub fn create_department(conn: &Connection, prompter: &mut impl Prompter) -> Result<Department> {
    log_op_start!("department_create");
    let start = std::time::Instant::now();

    let department = create_department_impl(conn, prompter).map_err(|e| {
        log_op_error!(
            "department_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "department_create",
        duration_ms = start.elapsed().as_millis() as u64,
        department_id = department.id
    );

    Ok(department)
}

fn create_department_impl(conn: &Connection, prompter: &mut impl Prompter) -> Result<Department> {
    let answers = prompter.ask(&[Question::input(
        "department",
        "Add Department:",
        Validation::required("Department name"),
    )])?;
    let name = answers.require("department")?;

    SqliteRepo::insert_department(conn, &NewDepartment::new(name)).map_err(at(Step::Persist))
}

/// Show each staffed department with the salary total of its employees
///
/// Departments nobody works in are not listed.
///
/// ## Errors
///
/// - `Persistence`: the query failed
/// - `Io`: writing the table failed
pub fn list_departments(conn: &Connection, renderer: &mut impl Renderer) -> Result<Vec<Row>> {
    log_op_start!("department_list");
    let start = std::time::Instant::now();

    let rows = listing::department_budgets(conn)
        .map_err(at(Step::Fetch))
        .and_then(|budgets| render_listing(&budgets, renderer))
        .map_err(|e| {
            log_op_error!(
                "department_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "department_list",
        duration_ms = start.elapsed().as_millis() as u64,
        row_count = rows.len()
    );

    Ok(rows)
}
