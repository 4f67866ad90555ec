//! # Error Handling
//!
//! Error types shared by the sequence operations and the stream transformers.
//!
//! ## Overview
//!
//! Only one class of failure originates inside this crate: a structurally
//! invalid argument, such as a batch size of zero. It is reported as
//! [`SequenceError::InvalidArgument`] before any element of the input is
//! consumed, so a failed call never leaves a partially traversed sequence
//! behind.
//!
//! Failures raised by caller-supplied callbacks (key extractors, value
//! extractors, predicates) are never wrapped. The `try_*` operations return
//! the caller's own error type unchanged and stop at the first failure.
//!
//! ## Example
//!
//! ```rust
//! use streamutils::error::SequenceError;
//! use streamutils::ops::batch;
//!
//! let err = batch(vec![1, 2, 3], 0).unwrap_err();
//! assert!(matches!(err, SequenceError::InvalidArgument { argument: "size", .. }));
//! ```

use thiserror::Error;

/// Errors produced by the operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
  /// A parameter was rejected before the input was traversed.
  #[error("invalid argument `{argument}`: {reason}")]
  InvalidArgument {
    /// Name of the offending parameter.
    argument: &'static str,
    /// Human readable description of the constraint that was violated.
    reason: String,
  },
}

impl SequenceError {
  /// Creates an [`SequenceError::InvalidArgument`] for the named parameter.
  pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
    Self::InvalidArgument {
      argument,
      reason: reason.into(),
    }
  }

  /// Returns `true` if this error rejected a parameter.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Self::InvalidArgument { .. })
  }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Identifies a transformer in log events.
///
/// This struct provides identifying information about a component,
/// including its name and type, which is useful for logging and error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
  /// The name of the component.
  pub name: String,
  /// The type name of the component.
  pub type_name: String,
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}
