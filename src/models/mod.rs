//! Data models for MeetingForge
//!
//! This module contains the structural schemas for raw records, the meeting
//! domain entities built from them, and the shared validation error type.

pub mod contact;
pub mod error;
pub mod meeting;
pub mod schema;
pub mod validation;

// Re-export commonly used types
pub use contact::{CorporateContact, DEFAULT_ORGANIZATION_DOMAIN};
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use meeting::{InPersonMeeting, Meeting, MeetingKind, MeetingRoom, OnlineMeeting, VideoPlatform};
pub use schema::{
    validate_raw_object, FrameworkSchemaValidator, InPersonMeetingSchema, MeetingSchema,
    OnlineMeetingSchema, SchemaValidator,
};
