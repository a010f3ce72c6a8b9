use std::{rc::Rc, time::Duration};

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        user::UserProfile,
    },
    infra::{config::UiConfig, contracts::Clock},
    nav::{
        mediator::{ObserverRegistry, ObserverRole, UiEvent},
        stack::ViewStack,
        view::{NavRequest, ViewContent, ViewProducer},
    },
    usecases::contracts::AppEventSource,
};

use super::{banner::Banner, render, terminal::TerminalSession};

/// One window: a view stack, an observer registry and a welcome banner,
/// wired for a single role. The registry is populated once at construction;
/// views talk to the shell only through the requests they return.
pub struct Shell {
    profile: UserProfile,
    stack: ViewStack,
    registry: ObserverRegistry,
    banner: Banner,
    home: ViewProducer,
    clock: Box<dyn Clock>,
    running: bool,
}

impl Shell {
    pub fn new(
        profile: UserProfile,
        registry: ObserverRegistry,
        home: ViewProducer,
        clock: Box<dyn Clock>,
        ui: &UiConfig,
    ) -> Self {
        let mut stack = ViewStack::default();
        stack.navigate_to(Rc::clone(&home), false);

        let mut banner = Banner::new(Duration::from_millis(ui.banner_timeout_ms));
        banner.show(
            format!(
                "Welcome, {}! You are signed in as {}.",
                profile.display_name,
                profile.role.label()
            ),
            clock.now(),
        );

        tracing::info!(role = profile.role.label(), "shell composed");
        Self {
            profile,
            stack,
            registry,
            banner,
            home,
            clock,
            running: true,
        }
    }

    // Navigation and publishing contract, delegated to the stack and the
    // registry the shell owns.

    pub fn navigate_to(&mut self, producer: ViewProducer, add_to_stack: bool) {
        self.stack.navigate_to(producer, add_to_stack);
    }

    pub fn navigate_back(&mut self) {
        self.stack.navigate_back();
    }

    pub fn can_navigate_back(&self) -> bool {
        self.stack.can_navigate_back()
    }

    pub fn publish(&mut self, event: UiEvent) {
        self.registry.publish(event);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_observer_registered(&self, role: ObserverRole) -> bool {
        self.registry.is_registered(role)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn content(&self) -> ViewContent {
        self.stack
            .current_view()
            .map(|view| view.content())
            .unwrap_or_else(|| ViewContent::new(""))
    }

    pub fn banner_message(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.banner.dismiss_expired(self.clock.now()),
            AppEvent::QuitRequested => self.running = false,
            AppEvent::InputKey(key) => self.handle_key(&key),
        }
    }

    fn handle_key(&mut self, key: &KeyInput) {
        if key.ctrl {
            return;
        }

        match key.key.as_str() {
            "esc" | "backspace" => self.navigate_back(),
            "h" => self.navigate_to(Rc::clone(&self.home), false),
            _ => {
                let requests = self
                    .stack
                    .current_view_mut()
                    .map(|view| view.handle_key(key))
                    .unwrap_or_default();

                for request in requests {
                    self.apply(request);
                }
            }
        }
    }

    fn apply(&mut self, request: NavRequest) {
        tracing::debug!(?request, "applying view request");
        match request {
            NavRequest::Open {
                producer,
                keep_return_point,
            } => self.navigate_to(producer, keep_return_point),
            NavRequest::Back => self.navigate_back(),
            NavRequest::Home => self.navigate_to(Rc::clone(&self.home), false),
            NavRequest::Publish(event) => self.publish(event),
        }
    }
}

pub fn start(shell: &mut Shell, event_source: &mut dyn AppEventSource) -> Result<()> {
    tracing::info!(role = shell.profile().role.label(), "starting TUI shell");

    let mut terminal = TerminalSession::new()?;

    while shell.is_running() {
        terminal.draw(|frame| render::render(frame, shell))?;

        if let Some(event) = event_source.next_event()? {
            shell.handle_event(event);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        controllers::{ActivityController, Controllers},
        domain::user::Role,
        infra::stubs::ManualClock,
        nav::mediator::{ConferenceEvent, Observer},
        ui::{event_source::MockEventSource, views},
        usecases::observers::ConferenceActivityManager,
    };

    fn attendee_shell(controllers: &Controllers, clock: ManualClock) -> Shell {
        let mut registry = ObserverRegistry::default();
        registry.register(Observer::Conference(Box::new(
            ConferenceActivityManager::new(
                Rc::clone(&controllers.conferences),
                Rc::clone(&controllers.activity),
            ),
        )));

        Shell::new(
            UserProfile::new(Role::Attendee, "Ada"),
            registry,
            views::attendee::upcoming_conferences(controllers, "ada"),
            Box::new(clock),
            &UiConfig::default(),
        )
    }

    #[test]
    fn freshly_composed_shell_cannot_navigate_back() {
        let controllers = Controllers::seeded();
        let shell = attendee_shell(&controllers, ManualClock::default());

        assert!(!shell.can_navigate_back());
        assert_eq!(shell.stack_depth(), 0);
        assert_eq!(shell.content().title, "Upcoming conferences");
    }

    #[test]
    fn quit_event_stops_the_shell() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());

        shell.handle_event(AppEvent::QuitRequested);

        assert!(!shell.is_running());
    }

    #[test]
    fn enter_then_esc_returns_to_home_view() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());

        shell.handle_event(AppEvent::InputKey(KeyInput::plain("enter")));
        assert_eq!(shell.stack_depth(), 1);
        assert_ne!(shell.content().title, "Upcoming conferences");

        shell.handle_event(AppEvent::InputKey(KeyInput::plain("esc")));
        assert_eq!(shell.stack_depth(), 0);
        assert_eq!(shell.content().title, "Upcoming conferences");
    }

    #[test]
    fn esc_on_home_view_is_a_no_op() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());

        shell.handle_event(AppEvent::InputKey(KeyInput::plain("esc")));

        assert!(shell.is_running());
        assert_eq!(shell.content().title, "Upcoming conferences");
    }

    #[test]
    fn home_key_resets_without_leaving_a_return_point() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());
        shell.handle_event(AppEvent::InputKey(KeyInput::plain("enter")));
        assert_eq!(shell.stack_depth(), 1);

        shell.handle_event(AppEvent::InputKey(KeyInput::plain("h")));

        // The reset replaces the display in place; earlier return points
        // remain untouched.
        assert_eq!(shell.content().title, "Upcoming conferences");
        assert_eq!(shell.stack_depth(), 1);
    }

    #[test]
    fn view_publication_reaches_the_registered_observer() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());

        // "r" registers for the selected conference and publishes the event;
        // the wired observer records it in the activity feed.
        shell.handle_event(AppEvent::InputKey(KeyInput::plain("r")));

        let recent = controllers.activity.borrow().recent(10);
        assert_eq!(recent.len(), 1);
        assert!(recent[0].description.contains("ada registered"));
    }

    #[test]
    fn publish_without_observer_is_dropped() {
        let controllers = Controllers::seeded();
        let mut shell = Shell::new(
            UserProfile::new(Role::Attendee, "Ada"),
            ObserverRegistry::default(),
            views::attendee::upcoming_conferences(&controllers, "ada"),
            Box::new(ManualClock::default()),
            &UiConfig::default(),
        );

        shell.publish(UiEvent::Conference(ConferenceEvent::AttendeeRegistered {
            conference_id: 1,
            attendee: "ada".to_owned(),
        }));

        assert!(controllers.activity.borrow().recent(10).is_empty());
    }

    #[test]
    fn banner_hides_after_its_timeout() {
        let controllers = Controllers::seeded();
        let clock = ManualClock::default();
        let mut shell = attendee_shell(&controllers, clock.clone());
        assert!(shell.banner_message().is_some());

        clock.advance(Duration::from_millis(
            UiConfig::default().banner_timeout_ms + 1,
        ));
        shell.handle_event(AppEvent::Tick);

        assert!(shell.banner_message().is_none());
    }

    #[test]
    fn mock_source_drives_the_shell_to_quit() {
        let controllers = Controllers::seeded();
        let mut shell = attendee_shell(&controllers, ManualClock::default());
        let mut source = MockEventSource::from(vec![
            AppEvent::InputKey(KeyInput::plain("enter")),
            AppEvent::QuitRequested,
        ]);

        while let Some(event) = source.next_event().expect("mock events must read") {
            shell.handle_event(event);
        }

        assert!(!shell.is_running());
        assert!(shell.can_navigate_back());
    }
}
