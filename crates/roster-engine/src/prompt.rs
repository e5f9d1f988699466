//! Interactive prompts
//!
//! Handlers describe what they need as a list of [`Question`]s and get the
//! answers back by name. Choices for a select question are computed by the
//! caller at call time, from rows it has just fetched.
//!
//! [`LinePrompter`] is the line-oriented implementation used by the binary
//! (stdin/stdout) and by tests (in-memory buffers).

use roster_core::errors::{ExError, ExErrorKind, Step};
use roster_core::rules::{parse_salary, validate_required};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended while a question was waiting
    #[error("input closed")]
    Closed,

    /// A select question was asked with nothing to choose from
    #[error("no choices offered for '{question}'")]
    NoChoices { question: String },

    /// A handler read an answer to a question it never asked
    #[error("no answer recorded for '{name}'")]
    Unanswered { name: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<PromptError> for ExError {
    fn from(err: PromptError) -> Self {
        let kind = match &err {
            PromptError::Closed => ExErrorKind::InputClosed,
            PromptError::NoChoices { .. } => ExErrorKind::NoChoices,
            PromptError::Unanswered { .. } => ExErrorKind::Internal,
            PromptError::Io(_) => ExErrorKind::Io,
        };
        ExError::new(kind)
            .with_step(Step::Prompt)
            .with_op("prompt")
            .with_message(err.to_string())
    }
}

/// Check applied to free-text answers before they are accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    None,
    /// Non-blank text; `field` names it in the re-prompt message
    Required { field: String },
    /// A finite, non-negative number
    Salary,
}

impl Validation {
    pub fn required(field: impl Into<String>) -> Self {
        Validation::Required {
            field: field.into(),
        }
    }

    /// The re-prompt message for a rejected answer, or `None` if accepted
    pub fn rejection(&self, answer: &str) -> Option<String> {
        match self {
            Validation::None => None,
            Validation::Required { field } => validate_required(field, answer)
                .err()
                .map(|_| format!("{} required", field)),
            Validation::Salary => parse_salary(answer)
                .err()
                .map(|_| "Salary must be a number".to_string()),
        }
    }
}

/// One question in a prompt sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Input {
        name: String,
        message: String,
        validation: Validation,
    },
    Select {
        name: String,
        message: String,
        choices: Vec<String>,
    },
}

impl Question {
    pub fn input(name: impl Into<String>, message: impl Into<String>, validation: Validation) -> Self {
        Question::Input {
            name: name.into(),
            message: message.into(),
            validation,
        }
    }

    pub fn select(name: impl Into<String>, message: impl Into<String>, choices: Vec<String>) -> Self {
        Question::Select {
            name: name.into(),
            message: message.into(),
            choices,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Question::Input { name, .. } | Question::Select { name, .. } => name,
        }
    }
}

/// Answers keyed by question name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<String, String>);

impl Answers {
    pub fn insert(&mut self, name: impl Into<String>, answer: impl Into<String>) {
        self.0.insert(name.into(), answer.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Answer to a question that was part of the sequence
    ///
    /// # Errors
    /// * `PromptError::Unanswered` - If no question named `name` was answered
    pub fn require(&self, name: &str) -> Result<&str, PromptError> {
        self.get(name).ok_or_else(|| PromptError::Unanswered {
            name: name.to_string(),
        })
    }
}

/// Asks a sequence of questions and collects the answers
pub trait Prompter {
    /// Ask every question in order
    ///
    /// # Errors
    /// * `PromptError::Closed` - If input ends before all questions are answered
    /// * `PromptError::NoChoices` - If a select question has no choices
    /// * `PromptError::Io` - If reading or writing fails
    fn ask(&mut self, questions: &[Question]) -> Result<Answers, PromptError>;
}

/// Line-oriented prompter over any reader/writer pair
///
/// Input questions read one line. Select questions list the choices
/// numbered from 1 and accept either the number or the exact label.
/// Rejected answers print a message and ask again.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_input(&mut self, message: &str, validation: &Validation) -> Result<String, PromptError> {
        loop {
            write!(self.output, "? {} ", message.trim_end())?;
            self.output.flush()?;
            let answer = self.read_line()?;
            match validation.rejection(&answer) {
                None => return Ok(answer),
                Some(reason) => writeln!(self.output, ">> {}", reason)?,
            }
        }
    }

    fn ask_select(
        &mut self,
        name: &str,
        message: &str,
        choices: &[String],
    ) -> Result<String, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::NoChoices {
                question: name.to_string(),
            });
        }

        loop {
            writeln!(self.output, "? {}", message.trim_end())?;
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, choice)?;
            }
            write!(self.output, "  Answer: ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            if let Some(choice) = pick(&answer, choices) {
                return Ok(choice.clone());
            }
            writeln!(
                self.output,
                ">> Please enter a number between 1 and {} or one of the listed options",
                choices.len()
            )?;
        }
    }
}

/// Numbers take precedence over labels that happen to look like numbers
fn pick<'a>(answer: &str, choices: &'a [String]) -> Option<&'a String> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        if (1..=choices.len()).contains(&number) {
            return choices.get(number - 1);
        }
    }
    choices.iter().find(|choice| choice.as_str() == answer)
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, questions: &[Question]) -> Result<Answers, PromptError> {
        let mut answers = Answers::default();
        for question in questions {
            let answer = match question {
                Question::Input {
                    message,
                    validation,
                    ..
                } => self.ask_input(message, validation)?,
                Question::Select {
                    name,
                    message,
                    choices,
                } => self.ask_select(name, message, choices)?,
            };
            answers.insert(question.name(), answer);
        }
        Ok(answers)
    }
}
