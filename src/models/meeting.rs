//! Meeting domain models
//!
//! This module defines the business entities produced by the pipeline and the
//! rules that cannot be expressed in the schema layer, such as room capacity.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use super::contact::{CorporateContact, DEFAULT_ORGANIZATION_DOMAIN};
use super::error::{ValidationError, ValidationErrorKind, ValidationResult};
use super::schema::{InPersonMeetingSchema, MeetingSchema, OnlineMeetingSchema};

/// Kinds of meeting supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingKind {
    /// Held in one of the organization's rooms
    InPerson,
    /// Held on a video platform
    Online,
}

impl MeetingKind {
    /// Convert to the wire representation used by the `type` field
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingKind::InPerson => "in_person",
            MeetingKind::Online => "online",
        }
    }
}

impl fmt::Display for MeetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bookable meeting rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetingRoom {
    #[serde(rename = "Room-101")]
    Room101,
    #[serde(rename = "Room-42")]
    Room42,
    #[serde(rename = "Amphitheater")]
    Amphitheater,
}

impl MeetingRoom {
    /// Translate a free-text room size into the matching room
    ///
    /// Only the exact tokens `small`, `medium` and `large` are understood;
    /// canonical room names are not accepted here.
    pub fn from_size(size: &str) -> Option<Self> {
        match size {
            "small" => Some(MeetingRoom::Room101),
            "medium" => Some(MeetingRoom::Room42),
            "large" => Some(MeetingRoom::Amphitheater),
            _ => None,
        }
    }

    /// Canonical room code
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingRoom::Room101 => "Room-101",
            MeetingRoom::Room42 => "Room-42",
            MeetingRoom::Amphitheater => "Amphitheater",
        }
    }

    /// Maximum number of guests the room can hold
    pub fn capacity(&self) -> u64 {
        match self {
            MeetingRoom::Room101 => 20,
            MeetingRoom::Room42 => 50,
            MeetingRoom::Amphitheater => 200,
        }
    }

    /// How the room is named in capacity messages
    pub fn capacity_label(&self) -> &'static str {
        match self {
            MeetingRoom::Room101 => "room 101",
            MeetingRoom::Room42 => "room 42",
            MeetingRoom::Amphitheater => "the amphitheater",
        }
    }
}

impl fmt::Display for MeetingRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported video platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Teams,
    Meet,
    Zoom,
}

impl VideoPlatform {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoPlatform::Teams => "teams",
            VideoPlatform::Meet => "meet",
            VideoPlatform::Zoom => "zoom",
        }
    }
}

impl fmt::Display for VideoPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A meeting booked in a physical room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InPersonMeeting {
    title: String,
    contact: CorporateContact,
    meeting_room: MeetingRoom,
    n_guests: u64,
}

impl InPersonMeeting {
    /// Build an in-person meeting, checking the room capacity
    pub fn new(
        title: impl Into<String>,
        contact: CorporateContact,
        meeting_room: MeetingRoom,
        n_guests: u64,
    ) -> ValidationResult<Self> {
        if n_guests > meeting_room.capacity() {
            return Err(ValidationErrorKind::CapacityExceeded {
                room: meeting_room,
                n_guests,
            }
            .into());
        }

        Ok(Self {
            title: title.into(),
            contact,
            meeting_room,
            n_guests,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contact(&self) -> &CorporateContact {
        &self.contact
    }

    pub fn meeting_room(&self) -> MeetingRoom {
        self.meeting_room
    }

    pub fn n_guests(&self) -> u64 {
        self.n_guests
    }

    /// Seats left in the room once every guest is seated
    pub fn free_seats(&self) -> u64 {
        self.meeting_room.capacity() - self.n_guests
    }

    /// Confirmation line such as `John DOE booked Room-101`
    pub fn booking_message(&self) -> String {
        format!("{} booked {}", self.contact, self.meeting_room)
    }
}

/// A meeting held on a video platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnlineMeeting {
    title: String,
    contact: CorporateContact,
    video_platform: VideoPlatform,
    video_link: String,
}

impl OnlineMeeting {
    /// Build an online meeting. There is no rule beyond the contact's.
    pub fn new(
        title: impl Into<String>,
        contact: CorporateContact,
        video_platform: VideoPlatform,
        video_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            contact,
            video_platform,
            video_link: video_link.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contact(&self) -> &CorporateContact {
        &self.contact
    }

    pub fn video_platform(&self) -> VideoPlatform {
        self.video_platform
    }

    pub fn video_link(&self) -> &str {
        &self.video_link
    }
}

/// A fully validated meeting
///
/// Serializes with a `type` tag matching the raw input's discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Meeting {
    InPerson(InPersonMeeting),
    Online(OnlineMeeting),
}

impl Meeting {
    /// Build the domain entity for a schema-validated record
    ///
    /// The contact is parsed first, so a contact error wins over a capacity
    /// error.
    pub fn from_schema(schema: MeetingSchema, organization_domain: &str) -> ValidationResult<Self> {
        match schema {
            MeetingSchema::InPerson(InPersonMeetingSchema {
                title,
                contact_email,
                meeting_room,
                n_guests,
            }) => {
                let contact = CorporateContact::parse(&contact_email, organization_domain)?;
                InPersonMeeting::new(title, contact, meeting_room, n_guests).map(Meeting::InPerson)
            },
            MeetingSchema::Online(OnlineMeetingSchema {
                title,
                contact_email,
                video_platform,
                video_link,
            }) => {
                let contact = CorporateContact::parse(&contact_email, organization_domain)?;
                Ok(Meeting::Online(OnlineMeeting::new(
                    title,
                    contact,
                    video_platform,
                    video_link,
                )))
            },
        }
    }

    /// Render the meeting as pretty-printed, `type`-tagged JSON
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn kind(&self) -> MeetingKind {
        match self {
            Meeting::InPerson(_) => MeetingKind::InPerson,
            Meeting::Online(_) => MeetingKind::Online,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Meeting::InPerson(meeting) => meeting.title(),
            Meeting::Online(meeting) => meeting.title(),
        }
    }

    pub fn contact(&self) -> &CorporateContact {
        match self {
            Meeting::InPerson(meeting) => meeting.contact(),
            Meeting::Online(meeting) => meeting.contact(),
        }
    }
}

/// Build a meeting for the default organization
impl TryFrom<MeetingSchema> for Meeting {
    type Error = ValidationError;

    fn try_from(schema: MeetingSchema) -> Result<Self, Self::Error> {
        Meeting::from_schema(schema, DEFAULT_ORGANIZATION_DOMAIN)
    }
}
