//! Structured logging facility
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile, default_filter)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Output always goes to stderr; stdout belongs to the interactive menu.
//!
//! # Usage
//!
//! ```rust
//! use roster_core::logging_facility::{init, Profile, DEFAULT_FILTER};
//!
//! // Initialize once at application startup
//! init(Profile::Development, DEFAULT_FILTER);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end
//! - `log_op_error!(op, err, duration_ms = ...)` - Log operation error

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile, DEFAULT_FILTER};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
