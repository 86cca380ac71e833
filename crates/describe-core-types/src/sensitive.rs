//! Sensitive data marker
//!
//! `Sensitive<T>` wraps a value whose contents must never show up in a
//! description, a diff or a log line. The describer renders it with the same
//! `...` placeholder it uses for private struct fields.

use std::fmt;

/// Wrapper for data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use describe_core_types::Sensitive;
///
/// let token = Sensitive::new("secret123");
/// assert_eq!(format!("{:?}", token), "...");
/// assert_eq!(format!("{}", token), "...");
///
/// // Access the actual value when needed
/// assert_eq!(token.expose(), &"secret123");
/// ```
pub struct Sensitive<T>(T);

/// Placeholder printed in place of a sensitive or private value
pub const REDACTED: &str = "...";

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
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

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
