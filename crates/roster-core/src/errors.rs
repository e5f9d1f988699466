use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,
    /// A selection was requested from an empty list
    NoChoices,

    // Internal consistency
    /// A chosen label did not match any of the candidates it was drawn from
    ResolutionMismatch,

    // Integration/IO
    Persistence,
    Io,
    /// The input stream ended while a prompt was waiting
    InputClosed,
    Config,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::NoChoices => "ERR_NO_CHOICES",
            ExErrorKind::ResolutionMismatch => "ERR_RESOLUTION_MISMATCH",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::InputClosed => "ERR_INPUT_CLOSED",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// The stage of an action in which an error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Connect,
    Fetch,
    Prompt,
    Resolve,
    Persist,
    Render,
}

impl Step {
    /// Stable lowercase name, used as a log field value
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Connect => "connect",
            Step::Fetch => "fetch",
            Step::Prompt => "prompt",
            Step::Resolve => "resolve",
            Step::Persist => "persist",
            Step::Render => "render",
        }
    }

    /// Human-readable description shown to the user
    pub fn describe(&self) -> &'static str {
        match self {
            Step::Connect => "Connecting to the data store",
            Step::Fetch => "Fetching reference data",
            Step::Prompt => "Reading input",
            Step::Resolve => "Resolving the selection",
            Step::Persist => "Saving changes",
            Step::Render => "Displaying results",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`), the action step it surfaced in, and
/// enough context to print a one-line message without exposing the raw
/// lower-level error.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    step: Option<Step>,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            step: None,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add step context
    pub fn with_step(mut self, step: Step) -> Self {
        self.step = Some(step);
        self
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the step context, if any
    pub fn step(&self) -> Option<Step> {
        self.step
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line message for the person at the terminal
    ///
    /// Names the failed step and carries the message text only; codes and
    /// operation names stay in the logs.
    pub fn user_message(&self) -> String {
        let detail = if self.message.is_empty() {
            self.kind.code()
        } else {
            self.message.as_str()
        };
        match self.step {
            Some(step) => format!("{} failed: {}", step.describe(), detail),
            None => detail.to_string(),
        }
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(step) = self.step {
            write!(f, " at step '{}'", step)?;
        }
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for roster operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// A required text field was empty or whitespace-only
    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    /// Salary input was not a finite, non-negative number
    #[error("Salary must be a non-negative number, got '{input}'")]
    InvalidSalary { input: String },

    #[error("Department not found: {department_id}")]
    DepartmentNotFound { department_id: i64 },

    #[error("Role not found: {role_id}")]
    RoleNotFound { role_id: i64 },

    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: i64 },

    #[error("Manager not found: {manager_id}")]
    ManagerNotFound { manager_id: i64 },

    /// A label chosen from a list does not belong to that list
    #[error("'{label}' does not match any of the {candidate_count} offered choices")]
    UnresolvedLabel {
        label: String,
        candidate_count: usize,
    },

    /// A selection needs at least one row of this kind
    #[error("No {what} exist yet; add one first")]
    NoChoices { what: String },
}

impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        let message = err.to_string();
        match err {
            RosterError::EmptyField { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_op(format!("validate_{}", field.to_lowercase().replace(' ', "_")))
                .with_message(message),

            RosterError::InvalidSalary { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_salary")
                .with_message(message),

            RosterError::DepartmentNotFound { department_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(department_id)
                    .with_message(message)
            }

            RosterError::RoleNotFound { role_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(role_id)
                .with_message(message),

            RosterError::EmployeeNotFound { employee_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(employee_id)
                .with_message(message),

            RosterError::ManagerNotFound { manager_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(manager_id)
                .with_message(message),

            RosterError::UnresolvedLabel { .. } => {
                ExError::new(ExErrorKind::ResolutionMismatch)
                    .with_step(Step::Resolve)
                    .with_op("resolve_label")
                    .with_message(message)
            }

            RosterError::NoChoices { .. } => ExError::new(ExErrorKind::NoChoices)
                .with_step(Step::Prompt)
                .with_message(message),
        }
    }
}
