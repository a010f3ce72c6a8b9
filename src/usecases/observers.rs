use std::{cell::RefCell, rc::Rc};

use chrono::NaiveDateTime;

use crate::{
    controllers::{ActivityController, ConferenceController, SessionController},
    domain::conference::FeedbackEntry,
    nav::mediator::{ConferenceObserver, FeedbackObserver, SessionObserver},
};

/// Records registration changes in the activity feed. The registration
/// itself already happened through the controller by the time the event
/// arrives; this manager only reacts to it.
pub struct ConferenceActivityManager {
    conferences: Rc<RefCell<dyn ConferenceController>>,
    activity: Rc<RefCell<dyn ActivityController>>,
}

impl ConferenceActivityManager {
    pub fn new(
        conferences: Rc<RefCell<dyn ConferenceController>>,
        activity: Rc<RefCell<dyn ActivityController>>,
    ) -> Self {
        Self {
            conferences,
            activity,
        }
    }

    fn conference_name(&self, conference_id: u64) -> String {
        self.conferences
            .borrow()
            .find(conference_id)
            .map(|summary| summary.name)
            .unwrap_or_else(|_| format!("conference #{conference_id}"))
    }
}

impl ConferenceObserver for ConferenceActivityManager {
    fn attendee_registered(&mut self, conference_id: u64, attendee: &str) {
        let name = self.conference_name(conference_id);
        self.activity
            .borrow_mut()
            .record(format!("{attendee} registered for {name}"));
    }

    fn attendee_unregistered(&mut self, conference_id: u64, attendee: &str) {
        let name = self.conference_name(conference_id);
        self.activity
            .borrow_mut()
            .record(format!("{attendee} withdrew from {name}"));
    }
}

/// Records schedule changes in the activity feed.
pub struct SessionActivityManager {
    sessions: Rc<RefCell<dyn SessionController>>,
    activity: Rc<RefCell<dyn ActivityController>>,
}

impl SessionActivityManager {
    pub fn new(
        sessions: Rc<RefCell<dyn SessionController>>,
        activity: Rc<RefCell<dyn ActivityController>>,
    ) -> Self {
        Self { sessions, activity }
    }
}

impl SessionObserver for SessionActivityManager {
    fn session_postponed(&mut self, session_id: u64, new_start: NaiveDateTime) {
        let title = self
            .sessions
            .borrow()
            .find(session_id)
            .map(|summary| summary.title)
            .unwrap_or_else(|_| format!("session #{session_id}"));

        self.activity.borrow_mut().record(format!(
            "{title} postponed to {}",
            new_start.format("%Y-%m-%d %H:%M")
        ));
    }
}

/// Stores submitted feedback through the session controller and notes it in
/// the activity feed. Here the event carries the whole side effect: feedback
/// views publish and never touch the controller themselves.
pub struct FeedbackRelayManager {
    sessions: Rc<RefCell<dyn SessionController>>,
    activity: Rc<RefCell<dyn ActivityController>>,
}

impl FeedbackRelayManager {
    pub fn new(
        sessions: Rc<RefCell<dyn SessionController>>,
        activity: Rc<RefCell<dyn ActivityController>>,
    ) -> Self {
        Self { sessions, activity }
    }
}

impl FeedbackObserver for FeedbackRelayManager {
    fn feedback_submitted(&mut self, feedback: &FeedbackEntry) {
        if let Err(error) = self.sessions.borrow_mut().add_feedback(feedback.clone()) {
            tracing::warn!(%error, session_id = feedback.session_id, "feedback not stored");
            return;
        }

        self.activity.borrow_mut().record(format!(
            "{} rated session #{} with {}/5",
            feedback.attendee, feedback.session_id, feedback.rating
        ));
    }
}
