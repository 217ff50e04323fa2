//! MeetingForge Library
//!
//! Turns untyped meeting requests into typed bookings in two stages: a
//! structural schema check on the raw record, then construction of the domain
//! entity under business rules such as room capacity.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    CorporateContact, InPersonMeeting, Meeting, MeetingKind, MeetingRoom, MeetingSchema,
    OnlineMeeting, SchemaValidator, ValidationError, ValidationErrorKind, ValidationResult,
    VideoPlatform,
};

// Re-export pipeline entry points
pub use pipeline::{create_meeting_from_json, create_meeting_from_raw, MeetingPipeline};
