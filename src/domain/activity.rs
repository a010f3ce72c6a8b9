use chrono::{DateTime, Utc};

/// A line in the shared activity feed written by event observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub recorded_at: DateTime<Utc>,
    pub description: String,
}

impl ActivityEntry {
    pub fn new(recorded_at: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            recorded_at,
            description: description.into(),
        }
    }
}
