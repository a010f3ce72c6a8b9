use chrono::NaiveDateTime;

use crate::domain::conference::FeedbackEntry;

/// Reacts to conference-level occurrences (registration changes).
pub trait ConferenceObserver {
    fn attendee_registered(&mut self, conference_id: u64, attendee: &str);
    fn attendee_unregistered(&mut self, conference_id: u64, attendee: &str);
}

/// Reacts to session schedule changes.
pub trait SessionObserver {
    fn session_postponed(&mut self, session_id: u64, new_start: NaiveDateTime);
}

/// Reacts to submitted session feedback.
pub trait FeedbackObserver {
    fn feedback_submitted(&mut self, feedback: &FeedbackEntry);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConferenceEvent {
    AttendeeRegistered { conference_id: u64, attendee: String },
    AttendeeUnregistered { conference_id: u64, attendee: String },
}

impl ConferenceEvent {
    fn deliver(&self, observer: &mut dyn ConferenceObserver) {
        match self {
            Self::AttendeeRegistered {
                conference_id,
                attendee,
            } => observer.attendee_registered(*conference_id, attendee),
            Self::AttendeeUnregistered {
                conference_id,
                attendee,
            } => observer.attendee_unregistered(*conference_id, attendee),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Postponed {
        session_id: u64,
        new_start: NaiveDateTime,
    },
}

impl SessionEvent {
    fn deliver(&self, observer: &mut dyn SessionObserver) {
        match self {
            Self::Postponed {
                session_id,
                new_start,
            } => observer.session_postponed(*session_id, *new_start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Submitted(FeedbackEntry),
}

impl FeedbackEvent {
    fn deliver(&self, observer: &mut dyn FeedbackObserver) {
        match self {
            Self::Submitted(feedback) => observer.feedback_submitted(feedback),
        }
    }
}

/// An event paired with its role statically, so a publish call site cannot
/// name a role its payload does not belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Conference(ConferenceEvent),
    Session(SessionEvent),
    Feedback(FeedbackEvent),
}

impl UiEvent {
    pub fn role(&self) -> ObserverRole {
        match self {
            Self::Conference(_) => ObserverRole::Conference,
            Self::Session(_) => ObserverRole::Session,
            Self::Feedback(_) => ObserverRole::Feedback,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverRole {
    Conference,
    Session,
    Feedback,
}

/// A handler tagged with the one role it serves. Registration goes through
/// this enum, so a handler can never land in a slot of the wrong role.
pub enum Observer {
    Conference(Box<dyn ConferenceObserver>),
    Session(Box<dyn SessionObserver>),
    Feedback(Box<dyn FeedbackObserver>),
}

/// Single-slot-per-role event mediator. Each shell wires its fixed observer
/// set here at construction; publishing resolves the one registered handler
/// for the event's role and invokes it synchronously.
///
/// This is deliberately not a multicast bus: one window, one handler per
/// concern.
#[derive(Default)]
pub struct ObserverRegistry {
    conference: Option<Box<dyn ConferenceObserver>>,
    session: Option<Box<dyn SessionObserver>>,
    feedback: Option<Box<dyn FeedbackObserver>>,
}

impl ObserverRegistry {
    /// Registers a handler for its role, replacing any previous one.
    pub fn register(&mut self, observer: Observer) {
        let role = match &observer {
            Observer::Conference(_) => ObserverRole::Conference,
            Observer::Session(_) => ObserverRole::Session,
            Observer::Feedback(_) => ObserverRole::Feedback,
        };
        if self.is_registered(role) {
            tracing::debug!(?role, "replacing registered observer");
        }

        match observer {
            Observer::Conference(handler) => self.conference = Some(handler),
            Observer::Session(handler) => self.session = Some(handler),
            Observer::Feedback(handler) => self.feedback = Some(handler),
        }
    }

    /// Delivers `event` to the handler registered for its role. Without a
    /// handler the event is dropped, not queued.
    pub fn publish(&mut self, event: UiEvent) {
        match &event {
            UiEvent::Conference(payload) => match self.conference.as_deref_mut() {
                Some(observer) => payload.deliver(observer),
                None => drop_event(&event),
            },
            UiEvent::Session(payload) => match self.session.as_deref_mut() {
                Some(observer) => payload.deliver(observer),
                None => drop_event(&event),
            },
            UiEvent::Feedback(payload) => match self.feedback.as_deref_mut() {
                Some(observer) => payload.deliver(observer),
                None => drop_event(&event),
            },
        }
    }

    pub fn is_registered(&self, role: ObserverRole) -> bool {
        match role {
            ObserverRole::Conference => self.conference.is_some(),
            ObserverRole::Session => self.session.is_some(),
            ObserverRole::Feedback => self.feedback.is_some(),
        }
    }
}

fn drop_event(event: &UiEvent) {
    tracing::debug!(role = ?event.role(), "event dropped, no observer registered");
}
