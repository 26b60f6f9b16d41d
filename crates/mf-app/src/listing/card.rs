use mf_core::{MissingPersonReport, SightingReport};

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Summary card of one record in the listing grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCard {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub status: &'static str,
    pub status_label: &'static str,
    pub location: String,
    pub date_line: String,
    pub description: String,
    pub image_url: Option<String>,
}

pub trait ToCard {
    fn to_card(&self) -> RecordCard;
}

/// "Sep 15, 2023"
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

impl ToCard for MissingPersonReport {
    fn to_card(&self) -> RecordCard {
        RecordCard {
            id: self.id,
            title: self.full_name.clone(),
            subtitle: Some(format!("Age: {}", self.age)),
            status: self.status.as_str(),
            status_label: self.status.label(),
            location: self.last_seen_location.clone(),
            date_line: format!("Last seen: {}", format_card_date(self.last_seen_date)),
            description: self.description.clone(),
            image_url: self.photo_url.clone(),
        }
    }
}

impl ToCard for SightingReport {
    fn to_card(&self) -> RecordCard {
        RecordCard {
            id: self.id,
            title: self
                .person_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or("Unknown person")
                .to_string(),
            subtitle: Some(format!("Confidence: {}", self.confidence_level.label())),
            status: self.status.as_str(),
            status_label: self.status.label(),
            location: self.location.clone(),
            date_line: format!("Seen: {}", format_card_date(self.sighting_date)),
            description: self.description.clone(),
            image_url: self.photo_url.clone(),
        }
    }
}
