use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceSummary {
    pub conference_id: u64,
    pub name: String,
    pub venue: String,
    pub starts_on: NaiveDate,
    pub registered_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: u64,
    pub conference_id: u64,
    pub title: String,
    pub speaker: String,
    pub starts_at: NaiveDateTime,
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub session_id: u64,
    pub attendee: String,
    pub rating: u8,
    pub comment: Option<String>,
}
