use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};

use crate::domain::{
    activity::ActivityEntry,
    conference::{ConferenceSummary, FeedbackEntry, SessionSummary},
};

use super::{
    ActivityController, ConferenceController, ControllerError, SessionController,
};

struct ConferenceRecord {
    conference_id: u64,
    name: String,
    venue: String,
    starts_on: NaiveDate,
    attendees: Vec<String>,
}

impl ConferenceRecord {
    fn summary(&self) -> ConferenceSummary {
        ConferenceSummary {
            conference_id: self.conference_id,
            name: self.name.clone(),
            venue: self.venue.clone(),
            starts_on: self.starts_on,
            registered_count: self.attendees.len(),
        }
    }
}

#[derive(Default)]
pub struct InMemoryConferences {
    records: Vec<ConferenceRecord>,
}

impl InMemoryConferences {
    pub fn seeded() -> Self {
        Self {
            records: vec![
                ConferenceRecord {
                    conference_id: 1,
                    name: "RustNative Days".to_owned(),
                    venue: "Lisbon".to_owned(),
                    starts_on: date(2026, 10, 5),
                    attendees: vec!["grace".to_owned()],
                },
                ConferenceRecord {
                    conference_id: 2,
                    name: "Async Summit".to_owned(),
                    venue: "Berlin".to_owned(),
                    starts_on: date(2026, 11, 12),
                    attendees: Vec::new(),
                },
                ConferenceRecord {
                    conference_id: 3,
                    name: "Systems Forum".to_owned(),
                    venue: "Oslo".to_owned(),
                    starts_on: date(2027, 1, 20),
                    attendees: vec!["grace".to_owned(), "linus".to_owned()],
                },
            ],
        }
    }

    fn record(&self, conference_id: u64) -> Result<&ConferenceRecord, ControllerError> {
        self.records
            .iter()
            .find(|record| record.conference_id == conference_id)
            .ok_or(ControllerError::ConferenceNotFound(conference_id))
    }

    fn record_mut(&mut self, conference_id: u64) -> Result<&mut ConferenceRecord, ControllerError> {
        self.records
            .iter_mut()
            .find(|record| record.conference_id == conference_id)
            .ok_or(ControllerError::ConferenceNotFound(conference_id))
    }
}

impl ConferenceController for InMemoryConferences {
    fn upcoming(&self) -> Vec<ConferenceSummary> {
        let mut summaries: Vec<_> = self.records.iter().map(ConferenceRecord::summary).collect();
        summaries.sort_by_key(|summary| summary.starts_on);
        summaries
    }

    fn find(&self, conference_id: u64) -> Result<ConferenceSummary, ControllerError> {
        self.record(conference_id).map(ConferenceRecord::summary)
    }

    fn registrations_for(&self, attendee: &str) -> Vec<ConferenceSummary> {
        self.records
            .iter()
            .filter(|record| record.attendees.iter().any(|name| name == attendee))
            .map(ConferenceRecord::summary)
            .collect()
    }

    fn attendees_of(&self, conference_id: u64) -> Result<Vec<String>, ControllerError> {
        self.record(conference_id)
            .map(|record| record.attendees.clone())
    }

    fn register(&mut self, conference_id: u64, attendee: &str) -> Result<(), ControllerError> {
        let record = self.record_mut(conference_id)?;
        if record.attendees.iter().any(|name| name == attendee) {
            return Err(ControllerError::AlreadyRegistered {
                conference_id,
                attendee: attendee.to_owned(),
            });
        }

        record.attendees.push(attendee.to_owned());
        Ok(())
    }

    fn unregister(&mut self, conference_id: u64, attendee: &str) -> Result<(), ControllerError> {
        let record = self.record_mut(conference_id)?;
        let Some(position) = record.attendees.iter().position(|name| name == attendee) else {
            return Err(ControllerError::NotRegistered {
                conference_id,
                attendee: attendee.to_owned(),
            });
        };

        record.attendees.remove(position);
        Ok(())
    }
}

struct SessionRecord {
    summary: SessionSummary,
    feedback: Vec<FeedbackEntry>,
}

#[derive(Default)]
pub struct InMemorySessions {
    records: Vec<SessionRecord>,
}

impl InMemorySessions {
    pub fn seeded() -> Self {
        let sessions = [
            (10, 1, "Borrow Checker Deep Dive", "grace", (2026, 10, 5, 9, 0), "Main Hall"),
            (11, 1, "Embedded Rust in Production", "linus", (2026, 10, 5, 11, 0), "Room B"),
            (12, 2, "Async Runtimes Compared", "grace", (2026, 11, 12, 10, 0), "Stage 1"),
            (13, 3, "Lock-Free Data Structures", "barbara", (2027, 1, 20, 14, 0), "Auditorium"),
        ];

        Self {
            records: sessions
                .into_iter()
                .map(|(session_id, conference_id, title, speaker, at, room)| SessionRecord {
                    summary: SessionSummary {
                        session_id,
                        conference_id,
                        title: title.to_owned(),
                        speaker: speaker.to_owned(),
                        starts_at: date(at.0, at.1, at.2)
                            .and_hms_opt(at.3, at.4, 0)
                            .unwrap_or_default(),
                        room: room.to_owned(),
                    },
                    feedback: Vec::new(),
                })
                .collect(),
        }
    }

    fn record_mut(&mut self, session_id: u64) -> Result<&mut SessionRecord, ControllerError> {
        self.records
            .iter_mut()
            .find(|record| record.summary.session_id == session_id)
            .ok_or(ControllerError::SessionNotFound(session_id))
    }
}

impl SessionController for InMemorySessions {
    fn for_conference(&self, conference_id: u64) -> Vec<SessionSummary> {
        let mut sessions: Vec<_> = self
            .records
            .iter()
            .filter(|record| record.summary.conference_id == conference_id)
            .map(|record| record.summary.clone())
            .collect();
        sessions.sort_by_key(|session| session.starts_at);
        sessions
    }

    fn for_speaker(&self, speaker: &str) -> Vec<SessionSummary> {
        let mut sessions: Vec<_> = self
            .records
            .iter()
            .filter(|record| record.summary.speaker == speaker)
            .map(|record| record.summary.clone())
            .collect();
        sessions.sort_by_key(|session| session.starts_at);
        sessions
    }

    fn find(&self, session_id: u64) -> Result<SessionSummary, ControllerError> {
        self.records
            .iter()
            .find(|record| record.summary.session_id == session_id)
            .map(|record| record.summary.clone())
            .ok_or(ControllerError::SessionNotFound(session_id))
    }

    fn postpone(
        &mut self,
        session_id: u64,
        delay_minutes: i64,
    ) -> Result<NaiveDateTime, ControllerError> {
        let record = self.record_mut(session_id)?;
        record.summary.starts_at = record.summary.starts_at + Duration::minutes(delay_minutes);
        Ok(record.summary.starts_at)
    }

    fn add_feedback(&mut self, feedback: FeedbackEntry) -> Result<(), ControllerError> {
        let record = self.record_mut(feedback.session_id)?;
        record.feedback.push(feedback);
        Ok(())
    }

    fn feedback_for(&self, session_id: u64) -> Vec<FeedbackEntry> {
        self.records
            .iter()
            .find(|record| record.summary.session_id == session_id)
            .map(|record| record.feedback.clone())
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub struct InMemoryActivity {
    entries: Vec<ActivityEntry>,
}

impl ActivityController for InMemoryActivity {
    fn record(&mut self, description: String) {
        self.entries.push(ActivityEntry::new(Utc::now(), description));
    }

    fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_is_sorted_by_start_date() {
        let conferences = InMemoryConferences::seeded();

        let upcoming = conferences.upcoming();

        let dates: Vec<_> = upcoming.iter().map(|c| c.starts_on).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn register_adds_attendee_and_updates_count() {
        let mut conferences = InMemoryConferences::seeded();

        conferences.register(2, "ada").expect("must register");

        let summary = conferences.find(2).expect("conference exists");
        assert_eq!(summary.registered_count, 1);
        assert_eq!(conferences.registrations_for("ada").len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut conferences = InMemoryConferences::seeded();
        conferences.register(2, "ada").expect("must register");

        let result = conferences.register(2, "ada");

        assert_eq!(
            result,
            Err(ControllerError::AlreadyRegistered {
                conference_id: 2,
                attendee: "ada".to_owned(),
            })
        );
    }

    #[test]
    fn unregister_removes_only_the_named_attendee() {
        let mut conferences = InMemoryConferences::seeded();

        conferences.unregister(3, "grace").expect("must unregister");

        let attendees = conferences.attendees_of(3).expect("conference exists");
        assert_eq!(attendees, ["linus"]);
    }

    #[test]
    fn unregister_without_registration_fails() {
        let mut conferences = InMemoryConferences::seeded();

        let result = conferences.unregister(2, "ada");

        assert_eq!(
            result,
            Err(ControllerError::NotRegistered {
                conference_id: 2,
                attendee: "ada".to_owned(),
            })
        );
    }

    #[test]
    fn unknown_conference_is_reported() {
        let conferences = InMemoryConferences::seeded();

        assert_eq!(
            conferences.find(99),
            Err(ControllerError::ConferenceNotFound(99))
        );
    }

    #[test]
    fn postpone_shifts_session_start() {
        let mut sessions = InMemorySessions::seeded();
        let before = sessions.find(10).expect("session exists").starts_at;

        let after = sessions.postpone(10, 15).expect("must postpone");

        assert_eq!(after, before + Duration::minutes(15));
    }

    #[test]
    fn feedback_is_stored_per_session() {
        let mut sessions = InMemorySessions::seeded();
        let feedback = FeedbackEntry {
            session_id: 12,
            attendee: "ada".to_owned(),
            rating: 4,
            comment: None,
        };

        sessions.add_feedback(feedback.clone()).expect("must store");

        assert_eq!(sessions.feedback_for(12), [feedback]);
        assert!(sessions.feedback_for(10).is_empty());
    }

    #[test]
    fn feedback_for_unknown_session_is_rejected() {
        let mut sessions = InMemorySessions::seeded();

        let result = sessions.add_feedback(FeedbackEntry {
            session_id: 99,
            attendee: "ada".to_owned(),
            rating: 1,
            comment: None,
        });

        assert_eq!(result, Err(ControllerError::SessionNotFound(99)));
    }

    #[test]
    fn recent_activity_is_newest_first_and_limited() {
        let mut activity = InMemoryActivity::default();
        for n in 1..=5 {
            activity.record(format!("entry {n}"));
        }

        let recent = activity.recent(3);

        let descriptions: Vec<_> = recent.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["entry 5", "entry 4", "entry 3"]);
    }
}
