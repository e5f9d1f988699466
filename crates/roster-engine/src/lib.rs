//! Roster Engine - workflow layer
//!
//! Drives the interactive session: the menu loop, the prompts each action
//! asks, and the tables the listings print. Action handlers coordinate the
//! prompts, the reference resolver and the data store gateway.

pub mod commands;
pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::{Answers, LinePrompter, PromptError, Prompter, Question, Validation};
pub use render::{Renderer, Row, TableRenderer};
pub use session::{Action, Session};
