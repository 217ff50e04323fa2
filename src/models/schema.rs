//! Structural schemas for raw meeting records
//!
//! This is the first stage of the pipeline. A raw JSON record is decoded into
//! one of two schema structs, selected by its `type` field, and every field is
//! checked for presence, type and format. Any failure collapses into the
//! generic [`ValidationError::invalid_raw_object`] rejection.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use super::error::{ValidationError, ValidationResult};
use super::meeting::{MeetingKind, MeetingRoom, VideoPlatform};
use super::validation::{
    deserialize_room_size, deserialize_trimmed, validate_email_local_part, validate_http_scheme,
};

/// Schema for `type: "in_person"` records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct InPersonMeetingSchema {
    /// Meeting title, trimmed
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1))]
    pub title: String,

    /// Contact email, syntax-checked but not yet parsed
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(email, custom(function = "validate_email_local_part"))]
    pub contact_email: String,

    /// Room translated from the `small` / `medium` / `large` size token
    #[serde(deserialize_with = "deserialize_room_size")]
    pub meeting_room: MeetingRoom,

    /// Number of guests
    #[validate(range(min = 1))]
    pub n_guests: u64,
}

/// Schema for `type: "online"` records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct OnlineMeetingSchema {
    /// Meeting title, trimmed
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1))]
    pub title: String,

    /// Contact email, syntax-checked but not yet parsed
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(email, custom(function = "validate_email_local_part"))]
    pub contact_email: String,

    /// Video platform (teams, meet, zoom)
    pub video_platform: VideoPlatform,

    /// Absolute http(s) link to the call
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(url, custom(function = "validate_http_scheme"))]
    pub video_link: String,
}

/// A record that passed the structural schema
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeetingSchema {
    InPerson(InPersonMeetingSchema),
    Online(OnlineMeetingSchema),
}

impl MeetingSchema {
    pub fn kind(&self) -> MeetingKind {
        match self {
            MeetingSchema::InPerson(_) => MeetingKind::InPerson,
            MeetingSchema::Online(_) => MeetingKind::Online,
        }
    }

    /// Run the field-level format checks of the selected schema
    pub fn validate_fields(&self) -> Result<(), validator::ValidationErrors> {
        match self {
            MeetingSchema::InPerson(schema) => schema.validate(),
            MeetingSchema::Online(schema) => schema.validate(),
        }
    }
}

/// Stage one of the pipeline: turns a raw record into a [`MeetingSchema`]
pub trait SchemaValidator {
    fn validate(&self, raw: &Value) -> ValidationResult<MeetingSchema>;
}

/// [`SchemaValidator`] backed by serde decoding and the `validator` derive
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkSchemaValidator;

impl SchemaValidator for FrameworkSchemaValidator {
    fn validate(&self, raw: &Value) -> ValidationResult<MeetingSchema> {
        if !raw.is_object() {
            debug!("Raw record is not a JSON object");
            return Err(ValidationError::invalid_raw_object());
        }

        let schema: MeetingSchema = serde_json::from_value(raw.clone()).map_err(|e| {
            debug!(error = %e, "Raw record does not match any meeting schema");
            ValidationError::invalid_raw_object()
        })?;

        schema.validate_fields().map_err(|e| {
            debug!(kind = %schema.kind(), error = %e, "Raw record failed field validation");
            ValidationError::invalid_raw_object()
        })?;

        Ok(schema)
    }
}

/// Validate a raw record with the default [`FrameworkSchemaValidator`]
pub fn validate_raw_object(raw: &Value) -> ValidationResult<MeetingSchema> {
    FrameworkSchemaValidator.validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn in_person_json() -> Value {
        json!({
            "title": "Team Meeting",
            "contact_email": "john.doe@acme.org",
            "type": "in_person",
            "meeting_room": "small",
            "n_guests": 5
        })
    }

    fn online_json() -> Value {
        json!({
            "title": "Weekly Standup",
            "contact_email": "team.lead@acme.org",
            "type": "online",
            "video_platform": "zoom",
            "video_link": "https://zoom.us/j/123456789"
        })
    }

    fn assert_rejected(raw: Value) {
        let error = validate_raw_object(&raw).unwrap_err();
        assert_eq!(error.to_string(), "Raw object is not valid", "input: {}", raw);
        assert!(error.is_structural());
    }

    #[test]
    fn test_valid_in_person_sizes() {
        let test_cases = vec![
            ("small", MeetingRoom::Room101),
            ("medium", MeetingRoom::Room42),
            ("large", MeetingRoom::Amphitheater),
        ];

        for (size, expected) in test_cases {
            let mut raw = in_person_json();
            raw["meeting_room"] = json!(size);

            let schema = validate_raw_object(&raw).unwrap();
            assert_eq!(
                schema,
                MeetingSchema::InPerson(InPersonMeetingSchema {
                    title: "Team Meeting".to_string(),
                    contact_email: "john.doe@acme.org".to_string(),
                    meeting_room: expected,
                    n_guests: 5,
                })
            );
        }
    }

    #[test]
    fn test_valid_online_platforms() {
        let test_cases = vec![
            ("teams", VideoPlatform::Teams, "https://teams.microsoft.com/l/meetup-join/123456789"),
            ("meet", VideoPlatform::Meet, "https://meet.google.com/abc-defg-hij"),
            ("zoom", VideoPlatform::Zoom, "https://zoom.us/j/123456789"),
        ];

        for (platform, expected, link) in test_cases {
            let mut raw = online_json();
            raw["video_platform"] = json!(platform);
            raw["video_link"] = json!(link);

            match validate_raw_object(&raw).unwrap() {
                MeetingSchema::Online(schema) => {
                    assert_eq!(schema.video_platform, expected);
                    assert_eq!(schema.video_link, link);
                },
                other => panic!("expected online schema, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut raw = in_person_json();
        raw["title"] = json!("  Team Meeting \n");
        raw["contact_email"] = json!(" john.doe@acme.org ");

        match validate_raw_object(&raw).unwrap() {
            MeetingSchema::InPerson(schema) => {
                assert_eq!(schema.title, "Team Meeting");
                assert_eq!(schema.contact_email, "john.doe@acme.org");
            },
            other => panic!("expected in-person schema, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mut raw = online_json();
        raw["agenda"] = json!(["intro", "demo"]);
        assert_eq!(validate_raw_object(&raw).unwrap().kind(), MeetingKind::Online);
    }

    #[test]
    fn test_non_object_inputs_rejected() {
        for raw in vec![
            Value::Null,
            json!("in_person"),
            json!(42),
            json!(true),
            json!([in_person_json()]),
        ] {
            assert_rejected(raw);
        }
    }

    #[test]
    fn test_discriminator_rejected() {
        assert_rejected(json!({}));

        for kind in vec![json!("hybrid"), json!("IN_PERSON"), json!("Online"), json!(1), Value::Null] {
            let mut raw = in_person_json();
            raw["type"] = kind;
            assert_rejected(raw);
        }

        let mut raw = in_person_json();
        raw.as_object_mut().unwrap().remove("type");
        assert_rejected(raw);
    }

    #[test]
    fn test_missing_fields_rejected() {
        for field in vec!["title", "contact_email", "meeting_room", "n_guests"] {
            let mut raw = in_person_json();
            raw.as_object_mut().unwrap().remove(field);
            assert_rejected(raw);
        }

        for field in vec!["title", "contact_email", "video_platform", "video_link"] {
            let mut raw = online_json();
            raw.as_object_mut().unwrap().remove(field);
            assert_rejected(raw);
        }
    }

    #[test]
    fn test_invalid_in_person_fields_rejected() {
        let test_cases = vec![
            ("title", json!("   ")),
            ("title", json!("")),
            ("title", json!(7)),
            ("contact_email", json!("invalid-email")),
            ("contact_email", json!("john.@acme.org")),
            ("contact_email", json!(".doe@acme.org")),
            ("contact_email", json!("john..doe@acme.org")),
            ("contact_email", Value::Null),
            ("meeting_room", json!("Room-101")),
            ("meeting_room", json!("invalid-room")),
            ("meeting_room", json!("Small")),
            ("meeting_room", json!(1)),
            ("n_guests", json!(0)),
            ("n_guests", json!(-3)),
            ("n_guests", json!(2.5)),
            ("n_guests", json!("5")),
        ];

        for (field, value) in test_cases {
            let mut raw = in_person_json();
            raw[field] = value;
            assert_rejected(raw);
        }
    }

    #[test]
    fn test_invalid_online_fields_rejected() {
        let test_cases = vec![
            ("contact_email", json!("team.@acme.org")),
            ("video_platform", json!("skype")),
            ("video_platform", json!("Zoom")),
            ("video_link", json!("invalid-url")),
            ("video_link", json!("ftp://files.acme.org/call")),
            ("video_link", json!("")),
        ];

        for (field, value) in test_cases {
            let mut raw = online_json();
            raw[field] = value;
            assert_rejected(raw);
        }
    }

    #[test]
    fn test_domain_rules_not_applied() {
        let mut raw = in_person_json();
        raw["contact_email"] = json!("johndoe@gmail.com");
        raw["n_guests"] = json!(500);

        assert!(validate_raw_object(&raw).is_ok());
    }
}
