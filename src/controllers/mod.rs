//! Controller boundary: the contracts views and observers call into.
//!
//! Domain services live behind these traits; the in-memory implementations
//! in [`memory`] back a running session without any persistence.

pub mod memory;

use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::{
    activity::ActivityEntry,
    conference::{ConferenceSummary, FeedbackEntry, SessionSummary},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("conference {0} not found")]
    ConferenceNotFound(u64),
    #[error("session {0} not found")]
    SessionNotFound(u64),
    #[error("{attendee} is already registered for conference {conference_id}")]
    AlreadyRegistered { conference_id: u64, attendee: String },
    #[error("{attendee} is not registered for conference {conference_id}")]
    NotRegistered { conference_id: u64, attendee: String },
}

pub trait ConferenceController {
    fn upcoming(&self) -> Vec<ConferenceSummary>;
    fn find(&self, conference_id: u64) -> Result<ConferenceSummary, ControllerError>;
    fn registrations_for(&self, attendee: &str) -> Vec<ConferenceSummary>;
    fn attendees_of(&self, conference_id: u64) -> Result<Vec<String>, ControllerError>;
    fn register(&mut self, conference_id: u64, attendee: &str) -> Result<(), ControllerError>;
    fn unregister(&mut self, conference_id: u64, attendee: &str) -> Result<(), ControllerError>;
}

pub trait SessionController {
    fn for_conference(&self, conference_id: u64) -> Vec<SessionSummary>;
    fn for_speaker(&self, speaker: &str) -> Vec<SessionSummary>;
    fn find(&self, session_id: u64) -> Result<SessionSummary, ControllerError>;
    fn postpone(
        &mut self,
        session_id: u64,
        delay_minutes: i64,
    ) -> Result<NaiveDateTime, ControllerError>;
    fn add_feedback(&mut self, feedback: FeedbackEntry) -> Result<(), ControllerError>;
    fn feedback_for(&self, session_id: u64) -> Vec<FeedbackEntry>;
}

pub trait ActivityController {
    fn record(&mut self, description: String);
    fn recent(&self, limit: usize) -> Vec<ActivityEntry>;
}

/// Shared handles to the controller set one shell works against. The whole
/// subsystem is single-threaded, so plain `Rc<RefCell<_>>` sharing is enough.
#[derive(Clone)]
pub struct Controllers {
    pub conferences: Rc<RefCell<dyn ConferenceController>>,
    pub sessions: Rc<RefCell<dyn SessionController>>,
    pub activity: Rc<RefCell<dyn ActivityController>>,
}

impl Controllers {
    pub fn seeded() -> Self {
        Self {
            conferences: Rc::new(RefCell::new(memory::InMemoryConferences::seeded())),
            sessions: Rc::new(RefCell::new(memory::InMemorySessions::seeded())),
            activity: Rc::new(RefCell::new(memory::InMemoryActivity::default())),
        }
    }
}
