use crate::{
    controllers::{ConferenceController, Controllers, SessionController},
    domain::{
        conference::{ConferenceSummary, FeedbackEntry, SessionSummary},
        events::KeyInput,
    },
    nav::{
        mediator::{ConferenceEvent, FeedbackEvent, UiEvent},
        view::{producer, ContentLine, NavRequest, View, ViewContent, ViewProducer},
    },
};

use super::RowPicker;

pub fn upcoming_conferences(controllers: &Controllers, attendee: &str) -> ViewProducer {
    let controllers = controllers.clone();
    let attendee = attendee.to_owned();
    producer(move || UpcomingConferencesView::new(controllers.clone(), attendee.clone()))
}

pub fn my_registrations(controllers: &Controllers, attendee: &str) -> ViewProducer {
    let controllers = controllers.clone();
    let attendee = attendee.to_owned();
    producer(move || MyRegistrationsView::new(controllers.clone(), attendee.clone()))
}

pub fn conference_detail(
    controllers: &Controllers,
    conference_id: u64,
    attendee: &str,
) -> ViewProducer {
    let controllers = controllers.clone();
    let attendee = attendee.to_owned();
    producer(move || ConferenceDetailView::new(controllers.clone(), conference_id, attendee.clone()))
}

struct UpcomingConferencesView {
    controllers: Controllers,
    attendee: String,
    rows: Vec<ConferenceSummary>,
    picker: RowPicker,
    notice: Option<String>,
}

impl UpcomingConferencesView {
    fn new(controllers: Controllers, attendee: String) -> Self {
        let rows = controllers.conferences.borrow().upcoming();
        let picker = RowPicker::new(rows.len());
        Self {
            controllers,
            attendee,
            rows,
            picker,
            notice: None,
        }
    }

    fn refresh(&mut self) {
        self.rows = self.controllers.conferences.borrow().upcoming();
        self.picker.resize(self.rows.len());
    }

    fn selected(&self) -> Option<&ConferenceSummary> {
        self.picker.selected().and_then(|index| self.rows.get(index))
    }

    fn register_selected(&mut self) -> Vec<NavRequest> {
        let Some(conference) = self.selected().cloned() else {
            return Vec::new();
        };

        let outcome = self
            .controllers
            .conferences
            .borrow_mut()
            .register(conference.conference_id, &self.attendee);

        match outcome {
            Ok(()) => {
                self.notice = Some(format!("Registered for {}", conference.name));
                self.refresh();
                vec![NavRequest::Publish(UiEvent::Conference(
                    ConferenceEvent::AttendeeRegistered {
                        conference_id: conference.conference_id,
                        attendee: self.attendee.clone(),
                    },
                ))]
            }
            Err(error) => {
                self.notice = Some(error.to_string());
                Vec::new()
            }
        }
    }

    fn unregister_selected(&mut self) -> Vec<NavRequest> {
        let Some(conference) = self.selected().cloned() else {
            return Vec::new();
        };

        let outcome = self
            .controllers
            .conferences
            .borrow_mut()
            .unregister(conference.conference_id, &self.attendee);

        match outcome {
            Ok(()) => {
                self.notice = Some(format!("Withdrew from {}", conference.name));
                self.refresh();
                vec![NavRequest::Publish(UiEvent::Conference(
                    ConferenceEvent::AttendeeUnregistered {
                        conference_id: conference.conference_id,
                        attendee: self.attendee.clone(),
                    },
                ))]
            }
            Err(error) => {
                self.notice = Some(error.to_string());
                Vec::new()
            }
        }
    }
}

impl View for UpcomingConferencesView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new("Upcoming conferences");
        push_conference_rows(&mut content, &self.rows, &self.picker);
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note(
            "enter details · r register · u withdraw · m my registrations".to_owned(),
        ));
        if let Some(notice) = &self.notice {
            content.push(ContentLine::Note(notice.clone()));
        }
        content
    }

    fn handle_key(&mut self, key: &KeyInput) -> Vec<NavRequest> {
        match key.key.as_str() {
            "j" | "down" => {
                self.picker.select_next();
                Vec::new()
            }
            "k" | "up" => {
                self.picker.select_previous();
                Vec::new()
            }
            "enter" => self
                .selected()
                .map(|conference| {
                    vec![NavRequest::open(conference_detail(
                        &self.controllers,
                        conference.conference_id,
                        &self.attendee,
                    ))]
                })
                .unwrap_or_default(),
            "r" => self.register_selected(),
            "u" => self.unregister_selected(),
            "m" => vec![NavRequest::open(my_registrations(
                &self.controllers,
                &self.attendee,
            ))],
            _ => Vec::new(),
        }
    }
}

struct MyRegistrationsView {
    controllers: Controllers,
    attendee: String,
    rows: Vec<ConferenceSummary>,
    picker: RowPicker,
    notice: Option<String>,
}

impl MyRegistrationsView {
    fn new(controllers: Controllers, attendee: String) -> Self {
        let rows = controllers.conferences.borrow().registrations_for(&attendee);
        let picker = RowPicker::new(rows.len());
        Self {
            controllers,
            attendee,
            rows,
            picker,
            notice: None,
        }
    }

    fn refresh(&mut self) {
        self.rows = self
            .controllers
            .conferences
            .borrow()
            .registrations_for(&self.attendee);
        self.picker.resize(self.rows.len());
    }
}

impl View for MyRegistrationsView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new(format!("Registrations of {}", self.attendee));
        if self.rows.is_empty() {
            content.push(ContentLine::Note("No registrations yet.".to_owned()));
        } else {
            push_conference_rows(&mut content, &self.rows, &self.picker);
        }
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note("enter details · u withdraw".to_owned()));
        if let Some(notice) = &self.notice {
            content.push(ContentLine::Note(notice.clone()));
        }
        content
    }

    fn handle_key(&mut self, key: &KeyInput) -> Vec<NavRequest> {
        match key.key.as_str() {
            "j" | "down" => {
                self.picker.select_next();
                Vec::new()
            }
            "k" | "up" => {
                self.picker.select_previous();
                Vec::new()
            }
            "enter" => self
                .picker
                .selected()
                .and_then(|index| self.rows.get(index))
                .map(|conference| {
                    vec![NavRequest::open(conference_detail(
                        &self.controllers,
                        conference.conference_id,
                        &self.attendee,
                    ))]
                })
                .unwrap_or_default(),
            "u" => {
                let Some(conference) = self
                    .picker
                    .selected()
                    .and_then(|index| self.rows.get(index))
                    .cloned()
                else {
                    return Vec::new();
                };

                let outcome = self
                    .controllers
                    .conferences
                    .borrow_mut()
                    .unregister(conference.conference_id, &self.attendee);

                match outcome {
                    Ok(()) => {
                        self.refresh();
                        let publish = NavRequest::Publish(UiEvent::Conference(
                            ConferenceEvent::AttendeeUnregistered {
                                conference_id: conference.conference_id,
                                attendee: self.attendee.clone(),
                            },
                        ));
                        if self.rows.is_empty() {
                            // Nothing left to show here; reset to the home
                            // view without a return point.
                            return vec![publish, NavRequest::Home];
                        }
                        self.notice = Some(format!("Withdrew from {}", conference.name));
                        vec![publish]
                    }
                    Err(error) => {
                        self.notice = Some(error.to_string());
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        }
    }
}

struct ConferenceDetailView {
    conference: Option<ConferenceSummary>,
    sessions: Vec<SessionSummary>,
    attendee: String,
    picker: RowPicker,
    notice: Option<String>,
}

impl ConferenceDetailView {
    fn new(controllers: Controllers, conference_id: u64, attendee: String) -> Self {
        let conference = controllers.conferences.borrow().find(conference_id).ok();
        let sessions = controllers.sessions.borrow().for_conference(conference_id);
        let picker = RowPicker::new(sessions.len());
        Self {
            conference,
            sessions,
            attendee,
            picker,
            notice: None,
        }
    }
}

impl View for ConferenceDetailView {
    fn content(&self) -> ViewContent {
        let Some(conference) = &self.conference else {
            let mut content = ViewContent::new("Conference");
            content.push(ContentLine::Note("Conference no longer exists.".to_owned()));
            return content;
        };

        let mut content = ViewContent::new(conference.name.clone());
        content.push(ContentLine::Heading(format!(
            "{} · starts {} · {} registered",
            conference.venue,
            conference.starts_on.format("%Y-%m-%d"),
            conference.registered_count
        )));
        content.push(ContentLine::Blank);
        for (index, session) in self.sessions.iter().enumerate() {
            content.push(ContentLine::Entry {
                text: format!(
                    "{} — {} ({}, {})",
                    session.starts_at.format("%H:%M"),
                    session.title,
                    session.speaker,
                    session.room
                ),
                selected: self.picker.selected() == Some(index),
            });
        }
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note(
            "1-5 rate selected session".to_owned(),
        ));
        if let Some(notice) = &self.notice {
            content.push(ContentLine::Note(notice.clone()));
        }
        content
    }

    fn handle_key(&mut self, key: &KeyInput) -> Vec<NavRequest> {
        match key.key.as_str() {
            "j" | "down" => {
                self.picker.select_next();
                Vec::new()
            }
            "k" | "up" => {
                self.picker.select_previous();
                Vec::new()
            }
            rating @ ("1" | "2" | "3" | "4" | "5") => {
                let Some(session) = self
                    .picker
                    .selected()
                    .and_then(|index| self.sessions.get(index))
                else {
                    return Vec::new();
                };

                // Not rated through controllers directly: the feedback
                // observer wired by the shell performs the storage.
                let rating: u8 = rating.parse().unwrap_or(0);
                self.notice = Some(format!("Rated \"{}\" {rating}/5", session.title));
                vec![NavRequest::Publish(UiEvent::Feedback(
                    FeedbackEvent::Submitted(FeedbackEntry {
                        session_id: session.session_id,
                        attendee: self.attendee.clone(),
                        rating,
                        comment: None,
                    }),
                ))]
            }
            _ => Vec::new(),
        }
    }
}

fn push_conference_rows(
    content: &mut ViewContent,
    rows: &[ConferenceSummary],
    picker: &RowPicker,
) {
    for (index, conference) in rows.iter().enumerate() {
        content.push(ContentLine::Entry {
            text: format!(
                "{} — {} — {} ({} registered)",
                conference.starts_on.format("%Y-%m-%d"),
                conference.name,
                conference.venue,
                conference.registered_count
            ),
            selected: picker.selected() == Some(index),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::mediator::UiEvent;

    fn key(name: &str) -> KeyInput {
        KeyInput::plain(name)
    }

    #[test]
    fn register_updates_controller_and_publishes() {
        let controllers = Controllers::seeded();
        let mut view = UpcomingConferencesView::new(controllers.clone(), "ada".to_owned());

        let requests = view.handle_key(&key("r"));

        assert_eq!(requests.len(), 1);
        let first_id = view.rows[0].conference_id;
        assert!(matches!(
            &requests[0],
            NavRequest::Publish(UiEvent::Conference(ConferenceEvent::AttendeeRegistered {
                conference_id,
                attendee,
            })) if *conference_id == first_id && attendee == "ada"
        ));
        assert_eq!(
            controllers.conferences.borrow().registrations_for("ada").len(),
            1
        );
    }

    #[test]
    fn duplicate_register_shows_notice_and_publishes_nothing() {
        let controllers = Controllers::seeded();
        let mut view = UpcomingConferencesView::new(controllers, "ada".to_owned());
        view.handle_key(&key("r"));

        let requests = view.handle_key(&key("r"));

        assert!(requests.is_empty());
        assert!(view
            .notice
            .as_deref()
            .is_some_and(|notice| notice.contains("already registered")));
    }

    #[test]
    fn enter_opens_detail_with_return_point() {
        let controllers = Controllers::seeded();
        let mut view = UpcomingConferencesView::new(controllers, "ada".to_owned());

        let requests = view.handle_key(&key("enter"));

        assert!(matches!(
            requests.as_slice(),
            [NavRequest::Open {
                keep_return_point: true,
                ..
            }]
        ));
    }

    #[test]
    fn withdrawal_from_registrations_list_publishes() {
        let controllers = Controllers::seeded();
        let mut view = MyRegistrationsView::new(controllers.clone(), "grace".to_owned());
        assert_eq!(view.rows.len(), 2);

        let requests = view.handle_key(&key("u"));

        assert!(matches!(
            requests.as_slice(),
            [NavRequest::Publish(UiEvent::Conference(
                ConferenceEvent::AttendeeUnregistered { .. }
            ))]
        ));
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn withdrawing_the_last_registration_resets_home() {
        let controllers = Controllers::seeded();
        let mut view = MyRegistrationsView::new(controllers, "linus".to_owned());
        assert_eq!(view.rows.len(), 1);

        let requests = view.handle_key(&key("u"));

        assert!(matches!(
            requests.as_slice(),
            [NavRequest::Publish(_), NavRequest::Home]
        ));
    }

    #[test]
    fn rating_publishes_feedback_without_touching_controllers() {
        let controllers = Controllers::seeded();
        let mut view = ConferenceDetailView::new(controllers.clone(), 1, "ada".to_owned());

        let requests = view.handle_key(&key("4"));

        let [NavRequest::Publish(UiEvent::Feedback(FeedbackEvent::Submitted(feedback)))] =
            requests.as_slice()
        else {
            panic!("expected one feedback publish");
        };
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.attendee, "ada");
        // Storage is the observer's job; the view itself wrote nothing.
        assert!(controllers
            .sessions
            .borrow()
            .feedback_for(feedback.session_id)
            .is_empty());
    }

    #[test]
    fn detail_of_missing_conference_renders_a_note() {
        let controllers = Controllers::seeded();
        let view = ConferenceDetailView::new(controllers, 99, "ada".to_owned());

        let content = view.content();

        assert!(content
            .lines
            .iter()
            .any(|line| matches!(line, ContentLine::Note(note) if note.contains("no longer"))));
    }
}
