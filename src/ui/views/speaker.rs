use crate::{
    controllers::{Controllers, SessionController},
    domain::{conference::SessionSummary, events::KeyInput},
    nav::{
        mediator::{SessionEvent, UiEvent},
        view::{producer, ContentLine, NavRequest, View, ViewContent, ViewProducer},
    },
};

use super::RowPicker;

const POSTPONE_STEP_MINUTES: i64 = 15;

pub fn my_sessions(controllers: &Controllers, speaker: &str) -> ViewProducer {
    let controllers = controllers.clone();
    let speaker = speaker.to_owned();
    producer(move || MySessionsView::new(controllers.clone(), speaker.clone()))
}

pub fn session_feedback(controllers: &Controllers, session_id: u64) -> ViewProducer {
    let controllers = controllers.clone();
    producer(move || SessionFeedbackView::new(controllers.clone(), session_id))
}

struct MySessionsView {
    controllers: Controllers,
    speaker: String,
    rows: Vec<SessionSummary>,
    picker: RowPicker,
    notice: Option<String>,
}

impl MySessionsView {
    fn new(controllers: Controllers, speaker: String) -> Self {
        let rows = controllers.sessions.borrow().for_speaker(&speaker);
        let picker = RowPicker::new(rows.len());
        Self {
            controllers,
            speaker,
            rows,
            picker,
            notice: None,
        }
    }

    fn refresh(&mut self) {
        self.rows = self.controllers.sessions.borrow().for_speaker(&self.speaker);
        self.picker.resize(self.rows.len());
    }

    fn postpone_selected(&mut self) -> Vec<NavRequest> {
        let Some(session) = self
            .picker
            .selected()
            .and_then(|index| self.rows.get(index))
            .cloned()
        else {
            return Vec::new();
        };

        let outcome = self
            .controllers
            .sessions
            .borrow_mut()
            .postpone(session.session_id, POSTPONE_STEP_MINUTES);

        match outcome {
            Ok(new_start) => {
                self.notice = Some(format!(
                    "\"{}\" moved to {}",
                    session.title,
                    new_start.format("%H:%M")
                ));
                self.refresh();
                vec![NavRequest::Publish(UiEvent::Session(
                    SessionEvent::Postponed {
                        session_id: session.session_id,
                        new_start,
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

impl View for MySessionsView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new(format!("Sessions of {}", self.speaker));
        if self.rows.is_empty() {
            content.push(ContentLine::Note("No sessions scheduled.".to_owned()));
        }
        for (index, session) in self.rows.iter().enumerate() {
            content.push(ContentLine::Entry {
                text: format!(
                    "{} — {} ({})",
                    session.starts_at.format("%Y-%m-%d %H:%M"),
                    session.title,
                    session.room
                ),
                selected: self.picker.selected() == Some(index),
            });
        }
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note(
            "enter feedback · p postpone 15 min".to_owned(),
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
                .picker
                .selected()
                .and_then(|index| self.rows.get(index))
                .map(|session| {
                    vec![NavRequest::open(session_feedback(
                        &self.controllers,
                        session.session_id,
                    ))]
                })
                .unwrap_or_default(),
            "p" => self.postpone_selected(),
            _ => Vec::new(),
        }
    }
}

struct SessionFeedbackView {
    title: String,
    ratings: Vec<String>,
}

impl SessionFeedbackView {
    fn new(controllers: Controllers, session_id: u64) -> Self {
        let title = controllers
            .sessions
            .borrow()
            .find(session_id)
            .map(|session| session.title)
            .unwrap_or_else(|_| format!("Session #{session_id}"));

        let ratings = controllers
            .sessions
            .borrow()
            .feedback_for(session_id)
            .iter()
            .map(|entry| match &entry.comment {
                Some(comment) => format!("{}/5 from {} — {comment}", entry.rating, entry.attendee),
                None => format!("{}/5 from {}", entry.rating, entry.attendee),
            })
            .collect();

        Self { title, ratings }
    }
}

impl View for SessionFeedbackView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new(format!("Feedback — {}", self.title));
        if self.ratings.is_empty() {
            content.push(ContentLine::Note("No feedback yet.".to_owned()));
        }
        for rating in &self.ratings {
            content.push(ContentLine::Entry {
                text: rating.clone(),
                selected: false,
            });
        }
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note("enter return".to_owned()));
        content
    }

    fn handle_key(&mut self, key: &KeyInput) -> Vec<NavRequest> {
        match key.key.as_str() {
            "enter" => vec![NavRequest::Back],
            _ => Vec::new(),
        }
    }
}
