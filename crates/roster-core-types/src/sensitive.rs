//! Redacting wrapper for secrets read from configuration
//!
//! The store password travels from the config file into `ConnectionOptions`
//! and from there into debug logs. Wrapping it keeps the value out of every
//! `{:?}` and `{}` on the way.

use serde::{Deserialize, Deserializer};
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// A value that formats as `***REDACTED***`
///
/// ```
/// use roster_core_types::Sensitive;
///
/// let password = Sensitive::new(String::from("hunter2"));
/// assert_eq!(format!("{:?} {}", password, password), "***REDACTED*** ***REDACTED***");
/// assert_eq!(password.expose(), "hunter2");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped value; only for the code that actually needs the secret
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

// Config sources carry the plain value.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Sensitive)
    }
}
