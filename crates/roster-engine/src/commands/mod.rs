//! Action handlers.
//!
//! One handler per menu action. Each handler fetches the rows its prompts
//! offer, asks its questions, resolves the chosen labels to ids and calls
//! the data store gateway.
//!
//! ## Logging Ownership
//!
//! Handlers own lifecycle logging for their operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod department;
pub mod employee;
pub mod role;

pub use department::{create_department, list_departments};
pub use employee::{create_employee, list_employees, reassign_employee_role};
pub use role::{create_role, list_roles};

use crate::render::{to_rows, Renderer, Row};
use roster_core::errors::{ExError, ExErrorKind, Step};
use roster_core::RosterError;
use serde::Serialize;

/// Tag an error with the step it surfaced in, keeping a step set closer to the cause
pub(crate) fn at(step: Step) -> impl Fn(ExError) -> ExError {
    move |err| {
        if err.step().is_some() {
            err
        } else {
            err.with_step(step)
        }
    }
}

/// Fail at the prompt step when a selection would have nothing to offer
pub(crate) fn require_choices<T>(rows: &[T], what: &str) -> Result<(), ExError> {
    if rows.is_empty() {
        return Err(RosterError::NoChoices {
            what: what.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Serialize listing records and hand them to the renderer
pub(crate) fn render_listing<T: Serialize>(
    records: &[T],
    renderer: &mut impl Renderer,
) -> Result<Vec<Row>, ExError> {
    let rows = to_rows(records).map_err(|e| {
        ExError::new(ExErrorKind::Internal)
            .with_step(Step::Render)
            .with_op("to_rows")
            .with_message(e.to_string())
    })?;
    renderer.render(&rows).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_step(Step::Render)
            .with_op("render")
            .with_message(e.to_string())
    })?;
    Ok(rows)
}
