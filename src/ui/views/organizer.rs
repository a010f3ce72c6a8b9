use crate::{
    controllers::{ActivityController, ConferenceController, Controllers},
    domain::{conference::ConferenceSummary, events::KeyInput},
    nav::view::{producer, ContentLine, NavRequest, View, ViewContent, ViewProducer},
};

use super::RowPicker;

pub fn dashboard(controllers: &Controllers, activity_limit: usize) -> ViewProducer {
    let controllers = controllers.clone();
    producer(move || DashboardView::new(controllers.clone(), activity_limit))
}

pub fn attendee_list(controllers: &Controllers, conference_id: u64) -> ViewProducer {
    let controllers = controllers.clone();
    producer(move || AttendeeListView::new(controllers.clone(), conference_id))
}

pub fn activity_log(controllers: &Controllers, limit: usize) -> ViewProducer {
    let controllers = controllers.clone();
    producer(move || ActivityLogView::new(controllers.clone(), limit))
}

struct DashboardView {
    controllers: Controllers,
    activity_limit: usize,
    rows: Vec<ConferenceSummary>,
    picker: RowPicker,
}

impl DashboardView {
    fn new(controllers: Controllers, activity_limit: usize) -> Self {
        let rows = controllers.conferences.borrow().upcoming();
        let picker = RowPicker::new(rows.len());
        Self {
            controllers,
            activity_limit,
            rows,
            picker,
        }
    }
}

impl View for DashboardView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new("Organizer dashboard");
        for (index, conference) in self.rows.iter().enumerate() {
            content.push(ContentLine::Entry {
                text: format!(
                    "{} — {} — {} ({} registered)",
                    conference.starts_on.format("%Y-%m-%d"),
                    conference.name,
                    conference.venue,
                    conference.registered_count
                ),
                selected: self.picker.selected() == Some(index),
            });
        }
        content.push(ContentLine::Blank);
        content.push(ContentLine::Note(
            "enter attendees · a activity log".to_owned(),
        ));
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
                    vec![NavRequest::open(attendee_list(
                        &self.controllers,
                        conference.conference_id,
                    ))]
                })
                .unwrap_or_default(),
            "a" => vec![NavRequest::open(activity_log(
                &self.controllers,
                self.activity_limit,
            ))],
            _ => Vec::new(),
        }
    }
}

struct AttendeeListView {
    conference_name: String,
    attendees: Vec<String>,
}

impl AttendeeListView {
    fn new(controllers: Controllers, conference_id: u64) -> Self {
        let conference_name = controllers
            .conferences
            .borrow()
            .find(conference_id)
            .map(|conference| conference.name)
            .unwrap_or_else(|_| format!("Conference #{conference_id}"));

        let attendees = controllers
            .conferences
            .borrow()
            .attendees_of(conference_id)
            .unwrap_or_default();

        Self {
            conference_name,
            attendees,
        }
    }
}

impl View for AttendeeListView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new(format!("Attendees — {}", self.conference_name));
        if self.attendees.is_empty() {
            content.push(ContentLine::Note("Nobody registered yet.".to_owned()));
        }
        for attendee in &self.attendees {
            content.push(ContentLine::Entry {
                text: attendee.clone(),
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

struct ActivityLogView {
    entries: Vec<String>,
}

impl ActivityLogView {
    fn new(controllers: Controllers, limit: usize) -> Self {
        let entries = controllers
            .activity
            .borrow()
            .recent(limit)
            .iter()
            .map(|entry| {
                format!(
                    "{} — {}",
                    entry.recorded_at.format("%H:%M:%S"),
                    entry.description
                )
            })
            .collect();

        Self { entries }
    }
}

impl View for ActivityLogView {
    fn content(&self) -> ViewContent {
        let mut content = ViewContent::new("Recent activity");
        if self.entries.is_empty() {
            content.push(ContentLine::Note("No activity recorded yet.".to_owned()));
        }
        for entry in &self.entries {
            content.push(ContentLine::Entry {
                text: entry.clone(),
                selected: false,
            });
        }
        content
    }

    fn handle_key(&mut self, _key: &KeyInput) -> Vec<NavRequest> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_enter_opens_attendee_list() {
        let controllers = Controllers::seeded();
        let mut view = DashboardView::new(controllers, 20);

        let requests = view.handle_key(&KeyInput::plain("enter"));

        assert!(matches!(
            requests.as_slice(),
            [NavRequest::Open {
                keep_return_point: true,
                ..
            }]
        ));
    }

    #[test]
    fn attendee_list_shows_registered_names() {
        let controllers = Controllers::seeded();

        let view = AttendeeListView::new(controllers, 3);

        assert_eq!(view.attendees, ["grace", "linus"]);
    }

    #[test]
    fn activity_log_respects_its_limit() {
        let controllers = Controllers::seeded();
        for n in 1..=4 {
            controllers
                .activity
                .borrow_mut()
                .record(format!("entry {n}"));
        }

        let view = ActivityLogView::new(controllers, 2);

        assert_eq!(view.entries.len(), 2);
        assert!(view.entries[0].ends_with("entry 4"));
    }
}
