//! Demonstration of the MeetingForge pipeline
//!
//! Run with: cargo run --example meeting_demo

use meetingforge::{logging, Config, Meeting};
use serde_json::{json, Value};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;
    logging::init_tracing(&config)?;
    config.log_config();

    let pipeline = config.pipeline();

    println!("=== MeetingForge Pipeline Demo ===\n");

    for (label, raw) in scenarios() {
        println!("📍 {}", label);
        println!("{}", serde_json::to_string_pretty(&raw)?);

        match pipeline.run(&raw) {
            Ok(meeting) => {
                println!("✅ Created {} meeting:", meeting.kind());
                println!("{}", meeting.to_json_pretty()?);
                if let Meeting::InPerson(meeting) = &meeting {
                    println!(
                        "   {} ({} free seats)",
                        meeting.booking_message(),
                        meeting.free_seats()
                    );
                }
            },
            Err(e) => println!("❌ {}", e),
        }
        println!();
    }

    Ok(())
}

fn scenarios() -> Vec<(&'static str, Value)> {
    vec![
        (
            "Valid in-person meeting",
            json!({
                "title": "Team Meeting",
                "contact_email": "john.doe@acme.org",
                "type": "in_person",
                "meeting_room": "small",
                "n_guests": 5
            }),
        ),
        (
            "Room over capacity",
            json!({
                "title": "Team Meeting",
                "contact_email": "john.doe@acme.org",
                "type": "in_person",
                "meeting_room": "small",
                "n_guests": 21
            }),
        ),
        (
            "Contact outside the organization",
            json!({
                "title": "Invalid Meeting",
                "contact_email": "firstname.lastname@gmail.com",
                "type": "online",
                "video_platform": "meet",
                "video_link": "https://meet.google.com/abc-defg-hij"
            }),
        ),
        (
            "Username without a dot",
            json!({
                "title": "X",
                "contact_email": "johndoe@acme.org",
                "type": "in_person",
                "meeting_room": "small",
                "n_guests": 1
            }),
        ),
        ("Empty record", json!({})),
        (
            "Canonical room name instead of a size",
            json!({
                "title": "Room Size Mapping Test",
                "contact_email": "john.doe@acme.org",
                "type": "in_person",
                "meeting_room": "Room-101",
                "n_guests": 5
            }),
        ),
    ]
}
