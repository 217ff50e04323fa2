//! Meeting creation pipeline
//!
//! Runs the schema stage and then the domain stage on a raw record. The first
//! failing stage decides the result; errors are never combined.

use serde_json::Value;
use tracing::{debug, warn};

use crate::logging::Timer;
use crate::models::{
    FrameworkSchemaValidator, Meeting, SchemaValidator, ValidationError, ValidationResult,
    DEFAULT_ORGANIZATION_DOMAIN,
};

/// Pipeline turning raw records into meetings
#[derive(Debug, Clone)]
pub struct MeetingPipeline<V = FrameworkSchemaValidator> {
    /// Stage one: structural validation
    validator: V,

    /// Email domain every contact must belong to
    organization_domain: String,
}

impl MeetingPipeline {
    /// Create a pipeline with the default schema validator and organization
    pub fn new() -> Self {
        Self::with_validator(FrameworkSchemaValidator)
    }
}

impl Default for MeetingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: SchemaValidator> MeetingPipeline<V> {
    /// Create a pipeline around a custom schema validator
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            organization_domain: DEFAULT_ORGANIZATION_DOMAIN.to_string(),
        }
    }

    /// Require contacts to belong to another organization domain
    pub fn organization_domain(mut self, domain: impl Into<String>) -> Self {
        self.organization_domain = domain.into();
        self
    }

    /// Get the configured organization domain
    pub fn domain(&self) -> &str {
        &self.organization_domain
    }

    /// Validate a raw record and build the matching meeting
    pub fn run(&self, raw: &Value) -> ValidationResult<Meeting> {
        let timer = Timer::start("create_meeting");

        let schema = match self.validator.validate(raw) {
            Ok(schema) => schema,
            Err(e) => {
                debug!(stage = "schema", error = %e, "Raw record rejected");
                timer.stop();
                return Err(e);
            },
        };

        let kind = schema.kind();
        debug!(stage = "schema", kind = %kind, "Raw record validated");

        let result = Meeting::from_schema(schema, &self.organization_domain);
        match &result {
            Ok(meeting) => debug!(
                stage = "domain",
                kind = %kind,
                title = %meeting.title(),
                "Meeting created"
            ),
            Err(e) => warn!(stage = "domain", kind = %kind, error = %e, "Meeting rejected"),
        }

        timer.stop();
        result
    }

    /// Parse JSON text and run the pipeline on it
    ///
    /// Text that is not valid JSON gets the same structural rejection as any
    /// malformed record.
    pub fn run_json(&self, text: &str) -> ValidationResult<Meeting> {
        let raw: Value = serde_json::from_str(text).map_err(|e| {
            debug!(stage = "parse", error = %e, "Input is not valid JSON");
            ValidationError::invalid_raw_object()
        })?;
        self.run(&raw)
    }
}

/// Create a meeting from a raw record using the default pipeline
pub fn create_meeting_from_raw(raw: &Value) -> ValidationResult<Meeting> {
    MeetingPipeline::new().run(raw)
}

/// Create a meeting from JSON text using the default pipeline
pub fn create_meeting_from_json(text: &str) -> ValidationResult<Meeting> {
    MeetingPipeline::new().run_json(text)
}
