//! Demonstration records shown by component previews.

use crate::{MissingPersonReport, MissingPersonStatus};

use chrono::NaiveDate;
use uuid::Uuid;

const SEED_AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// The six sample cases of the missing persons grid: four active, one found,
/// one resolved.
pub fn missing_persons() -> Vec<MissingPersonReport> {
    vec![
        person(
            1,
            "Sarah Johnson",
            19,
            "Downtown Seattle, WA",
            date(2023, 10, 12),
            "Last seen wearing a red hoodie and black jeans. Has a butterfly tattoo on right wrist.",
            MissingPersonStatus::Active,
        ),
        person(
            2,
            "Michael Chen",
            32,
            "Central Park, New York",
            date(2023, 9, 28),
            "Last seen in business attire. Has a distinctive scar on left cheek.",
            MissingPersonStatus::Active,
        ),
        person(
            3,
            "Emma Rodriguez",
            16,
            "Miami Beach, FL",
            date(2023, 10, 5),
            "Last seen wearing school uniform. Has braces and long brown hair.",
            MissingPersonStatus::Active,
        ),
        person(
            4,
            "David Wilson",
            45,
            "Chicago Loop, IL",
            date(2023, 9, 15),
            "Last seen wearing a gray coat. Has glasses and a beard.",
            MissingPersonStatus::Found,
        ),
        person(
            5,
            "Olivia Thompson",
            28,
            "Golden Gate Park, San Francisco",
            date(2023, 10, 1),
            "Last seen in running clothes. Has a small heart tattoo on ankle.",
            MissingPersonStatus::Active,
        ),
        person(
            6,
            "James Peterson",
            52,
            "Pike Place Market, Seattle",
            date(2023, 9, 20),
            "Last seen wearing a blue raincoat. Has a limp in right leg.",
            MissingPersonStatus::Resolved,
        ),
    ]
}

fn person(
    n: u128,
    name: &str,
    age: u32,
    last_seen: &str,
    last_seen_date: NaiveDate,
    description: &str,
    status: MissingPersonStatus,
) -> MissingPersonReport {
    MissingPersonReport {
        id: Uuid::from_u128(n),
        full_name: name.to_string(),
        age,
        gender: String::new(),
        last_seen_date,
        last_seen_time: None,
        last_seen_location: last_seen.to_string(),
        description: description.to_string(),
        contact_info: String::new(),
        photo_url: Some(crate::placeholder_avatar_url(SEED_AVATAR_BASE, name)),
        status,
        created_at: None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
