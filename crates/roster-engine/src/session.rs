//! Interactive session
//!
//! The menu loop is a small state machine: `Menu` asks which action to run,
//! `Dispatch` runs it and reports the outcome, `Done` prints the farewell.
//! A failed action is reported and the menu comes back; only "Exit program"
//! or the end of input ends the session.

use crate::commands;
use crate::prompt::{PromptError, Prompter, Question};
use crate::render::Renderer;
use roster_core::errors::{ExError, ExErrorKind};
use roster_core_types::SessionId;
use rusqlite::Connection;
use std::io::{self, Write};

/// The menu question
pub const MENU_QUESTION: &str = "What actions do you want to take?";

/// Printed when the session ends
pub const FAREWELL: &str = "See you later...";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDepartment,
    AddRole,
    AddEmployee,
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    ChangeEmployeeRole,
    Exit,
}

impl Action {
    /// Menu order
    pub const ALL: [Action; 8] = [
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::ChangeEmployeeRole,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddDepartment => "Add New Department Type",
            Action::AddRole => "Add New Employee Role Type",
            Action::AddEmployee => "Add New Employee",
            Action::ViewDepartments => "View all Departments",
            Action::ViewRoles => "View all Employee Roles",
            Action::ViewEmployees => "View all Employees",
            Action::ChangeEmployeeRole => "Change the job of the employee",
            Action::Exit => "Exit program",
        }
    }

    pub fn from_label(label: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.label() == label)
    }

    /// Confirmation printed after the action succeeds
    fn confirmation(&self) -> Option<&'static str> {
        match self {
            Action::AddDepartment => Some("New Department added successfully"),
            Action::AddRole => Some("Employee Role added successfully"),
            Action::AddEmployee => Some("Employee added successfully"),
            Action::ChangeEmployeeRole => Some("Employee role changed successfully"),
            Action::ViewDepartments | Action::ViewRoles | Action::ViewEmployees | Action::Exit => {
                None
            }
        }
    }

    fn menu_labels() -> Vec<String> {
        Action::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

enum State {
    Menu,
    Dispatch(Action),
    Done,
}

/// One interactive session over a single connection
///
/// The session owns the connection for its whole life. Prompts go through
/// `P`, listings through `R`, and confirmations, errors and the farewell are
/// written to `W`.
pub struct Session<P, R, W> {
    id: SessionId,
    conn: Connection,
    prompter: P,
    renderer: R,
    output: W,
}

impl<P: Prompter, R: Renderer, W: Write> Session<P, R, W> {
    pub fn new(conn: Connection, prompter: P, renderer: R, output: W) -> Self {
        Self {
            id: SessionId::new(),
            conn,
            prompter,
            renderer,
            output,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// # Errors
    /// Returns an error only if writing to the output fails; action
    /// failures are reported to the user and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        let span = tracing::info_span!("session", session_id = %self.id);
        let _guard = span.enter();
        tracing::debug!("session started");

        let mut state = State::Menu;
        loop {
            state = match state {
                State::Menu => self.menu()?,
                State::Dispatch(action) => self.dispatch(action)?,
                State::Done => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    self.output.flush()?;
                    tracing::debug!("session finished");
                    return Ok(());
                }
            };
        }
    }

    /// Release the connection
    ///
    /// # Errors
    /// Returns the error SQLite reports while closing.
    pub fn close(self) -> roster_store::Result<()> {
        roster_store::db::close(self.conn)
    }

    fn menu(&mut self) -> io::Result<State> {
        let question = Question::select("action", MENU_QUESTION, Action::menu_labels());
        match self.prompter.ask(&[question]) {
            Ok(answers) => match answers.get("action").and_then(Action::from_label) {
                Some(action) => Ok(State::Dispatch(action)),
                None => {
                    tracing::warn!(answer = ?answers.get("action"), "menu answer is not an action");
                    Ok(State::Menu)
                }
            },
            Err(PromptError::Closed) => Ok(State::Done),
            Err(err) => {
                self.report(&err.into())?;
                Ok(State::Done)
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> io::Result<State> {
        tracing::debug!(action = action.label(), "dispatching");
        let conn = &self.conn;
        let outcome: Result<(), ExError> = match action {
            Action::AddDepartment => commands::create_department(conn, &mut self.prompter).map(drop),
            Action::AddRole => commands::create_role(conn, &mut self.prompter).map(drop),
            Action::AddEmployee => commands::create_employee(conn, &mut self.prompter).map(drop),
            Action::ViewDepartments => commands::list_departments(conn, &mut self.renderer).map(drop),
            Action::ViewRoles => commands::list_roles(conn, &mut self.renderer).map(drop),
            Action::ViewEmployees => commands::list_employees(conn, &mut self.renderer).map(drop),
            Action::ChangeEmployeeRole => {
                commands::reassign_employee_role(conn, &mut self.prompter).map(drop)
            }
            Action::Exit => return Ok(State::Done),
        };

        match outcome {
            Ok(()) => {
                if let Some(confirmation) = action.confirmation() {
                    writeln!(self.output, "{}", confirmation)?;
                    self.output.flush()?;
                }
                Ok(State::Menu)
            }
            Err(err) if err.kind() == ExErrorKind::InputClosed => Ok(State::Done),
            Err(err) => {
                self.report(&err)?;
                Ok(State::Menu)
            }
        }
    }

    fn report(&mut self, err: &ExError) -> io::Result<()> {
        writeln!(self.output, "error: {}", err.user_message())?;
        self.output.flush()
    }
}
