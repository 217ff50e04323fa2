//! Field-level validation and coercion helpers for meeting schemas
//!
//! The deserializers here run while a raw record is decoded; the `validate_*`
//! functions plug into the `validator` derive on the schema structs.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;
use validator::ValidationError;

use super::meeting::MeetingRoom;

static HTTP_SCHEME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get or initialize the http(s) scheme pattern
fn http_scheme_regex() -> &'static Regex {
    HTTP_SCHEME_REGEX.get_or_init(|| {
        Regex::new(r"^(?i)https?://[^/?#\s]+").expect("Invalid HTTP scheme regex pattern")
    })
}

/// Validate that a URL uses the http or https scheme, for validator crate
///
/// General URL syntax is checked separately by `#[validate(url)]`.
pub fn validate_http_scheme(url: &str) -> Result<(), ValidationError> {
    if http_scheme_regex().is_match(url) {
        Ok(())
    } else {
        Err(ValidationError::new("URL scheme must be http or https"))
    }
}

/// Validate the dots of an email's local part, for validator crate
///
/// `#[validate(email)]` lets a local part start or end with a dot, or hold
/// two dots in a row; none of those is a valid address.
pub fn validate_email_local_part(email: &str) -> Result<(), ValidationError> {
    let local = email.rsplit_once('@').map_or(email, |(local, _)| local);
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        Err(ValidationError::new("Email local part has a misplaced dot"))
    } else {
        Ok(())
    }
}

/// Deserialize a string and strip surrounding whitespace
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// Deserialize a free-text room size (`small`, `medium`, `large`) into a room
pub fn deserialize_room_size<'de, D>(deserializer: D) -> Result<MeetingRoom, D::Error>
where
    D: Deserializer<'de>,
{
    let size = String::deserialize(deserializer)?;
    MeetingRoom::from_size(&size)
        .ok_or_else(|| serde::de::Error::custom(format!("Unknown meeting room size: {}", size)))
}
