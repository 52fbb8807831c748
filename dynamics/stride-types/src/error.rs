//! Error types for dynamics operations.

use thiserror::Error;

/// Errors that can occur when constructing dynamics inputs.
///
/// All evaluation paths are pure and infallible; errors arise only from
/// invalid construction parameters, which are rejected eagerly so that no
/// component can exist in an invalid state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DynamicsError {
    /// Gravitational acceleration must be strictly positive.
    #[error("gravitational acceleration must be strictly positive, got {0}")]
    NonPositiveGravity(f64),

    /// Invalid robot inertial description.
    #[error("invalid inertial properties: {reason}")]
    InvalidInertialProperties {
        /// Description of what's wrong.
        reason: String,
    },

    /// A per-foot array did not have exactly one entry per foot.
    #[error("expected {expected} per-foot entries, got {actual}")]
    FootCountMismatch {
        /// Required number of entries.
        expected: usize,
        /// Number of entries provided.
        actual: usize,
    },

    /// A joint-space array did not have exactly one entry per joint.
    #[error("expected {expected} joint entries, got {actual}")]
    JointCountMismatch {
        /// Required number of entries.
        expected: usize,
        /// Number of entries provided.
        actual: usize,
    },
}

impl DynamicsError {
    /// Create an invalid-inertial-properties error.
    #[must_use]
    pub fn invalid_inertial(reason: impl Into<String>) -> Self {
        Self::InvalidInertialProperties {
            reason: reason.into(),
        }
    }
}

/// Result type for dynamics operations.
pub type Result<T> = std::result::Result<T, DynamicsError>;
