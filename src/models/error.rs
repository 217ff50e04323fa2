//! Validation error types for meeting models
//!
//! Both pipeline stages report failures through [`ValidationError`]. Callers
//! only rely on its message; the kind lets the pipeline tell a structural
//! rejection apart from a business-rule rejection.

use thiserror::Error;

use super::meeting::MeetingRoom;

/// Main validation error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }

    /// The generic rejection produced by the schema layer
    pub fn invalid_raw_object() -> Self {
        Self::new(ValidationErrorKind::InvalidRawObject)
    }

    /// Get the kind of this error
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Human-readable message for this error
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Check if this error came from the schema layer
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InvalidRawObject)
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Specific validation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input failed the structural schema (shape, type or format)
    #[error("Raw object is not valid")]
    InvalidRawObject,

    /// Contact email belongs to another organization
    #[error("Email domain must be '{expected}', '{found}' is not valid.")]
    EmailDomain { expected: String, found: String },

    /// Contact local part is not `firstname.lastname`
    #[error("Username must be 'firstname.lastname', '{0}' is not valid.")]
    UsernameFormat(String),

    /// More guests than the room can hold
    #[error(
        "max capacity for {} is {} ({} guests required)",
        .room.capacity_label(),
        .room.capacity(),
        .n_guests
    )]
    CapacityExceeded { room: MeetingRoom, n_guests: u64 },
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convert validation errors to application errors
impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::validation(err.to_string())
    }
}
