use std::rc::Rc;

use crate::{
    controllers::Controllers,
    domain::user::Role,
    infra::contracts::{Clock, SystemClock},
    nav::mediator::{Observer, ObserverRegistry},
    ui::{shell::Shell, views},
    usecases::{
        context::AppContext,
        observers::{ConferenceActivityManager, FeedbackRelayManager, SessionActivityManager},
    },
};

pub fn compose_shell(context: &AppContext, controllers: &Controllers) -> Shell {
    compose_shell_with_clock(context, controllers, Box::new(SystemClock))
}

/// The three shells are structurally identical; only the observer set and
/// the home view differ per role.
pub fn compose_shell_with_clock(
    context: &AppContext,
    controllers: &Controllers,
    clock: Box<dyn Clock>,
) -> Shell {
    let profile = context.profile.clone();
    let ui = &context.config.ui;
    let user = profile.display_name.to_lowercase();

    let mut registry = ObserverRegistry::default();
    let home = match profile.role {
        Role::Attendee => {
            registry.register(conference_observer(controllers));
            registry.register(feedback_observer(controllers));
            views::attendee::upcoming_conferences(controllers, &user)
        }
        Role::Speaker => {
            registry.register(session_observer(controllers));
            registry.register(feedback_observer(controllers));
            views::speaker::my_sessions(controllers, &user)
        }
        Role::Organizer => {
            registry.register(conference_observer(controllers));
            registry.register(session_observer(controllers));
            views::organizer::dashboard(controllers, ui.activity_limit)
        }
    };

    Shell::new(profile, registry, home, clock, ui)
}

fn conference_observer(controllers: &Controllers) -> Observer {
    Observer::Conference(Box::new(ConferenceActivityManager::new(
        Rc::clone(&controllers.conferences),
        Rc::clone(&controllers.activity),
    )))
}

fn session_observer(controllers: &Controllers) -> Observer {
    Observer::Session(Box::new(SessionActivityManager::new(
        Rc::clone(&controllers.sessions),
        Rc::clone(&controllers.activity),
    )))
}

fn feedback_observer(controllers: &Controllers) -> Observer {
    Observer::Feedback(Box::new(FeedbackRelayManager::new(
        Rc::clone(&controllers.sessions),
        Rc::clone(&controllers.activity),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::user::UserProfile,
        infra::{config::AppConfig, stubs::ManualClock},
        nav::mediator::ObserverRole,
    };

    fn context(role: Role) -> AppContext {
        AppContext::new(
            AppConfig::default(),
            UserProfile::new(role, "Grace"),
        )
    }

    fn composed(role: Role) -> Shell {
        compose_shell_with_clock(
            &context(role),
            &Controllers::seeded(),
            Box::new(ManualClock::default()),
        )
    }

    #[test]
    fn attendee_shell_observes_conferences_and_feedback() {
        let shell = composed(Role::Attendee);

        assert!(shell.is_observer_registered(ObserverRole::Conference));
        assert!(shell.is_observer_registered(ObserverRole::Feedback));
        assert!(!shell.is_observer_registered(ObserverRole::Session));
        assert_eq!(shell.content().title, "Upcoming conferences");
    }

    #[test]
    fn speaker_shell_observes_sessions_and_feedback() {
        let shell = composed(Role::Speaker);

        assert!(shell.is_observer_registered(ObserverRole::Session));
        assert!(shell.is_observer_registered(ObserverRole::Feedback));
        assert!(!shell.is_observer_registered(ObserverRole::Conference));
        assert_eq!(shell.content().title, "Sessions of grace");
    }

    #[test]
    fn organizer_shell_observes_conferences_and_sessions() {
        let shell = composed(Role::Organizer);

        assert!(shell.is_observer_registered(ObserverRole::Conference));
        assert!(shell.is_observer_registered(ObserverRole::Session));
        assert!(!shell.is_observer_registered(ObserverRole::Feedback));
        assert_eq!(shell.content().title, "Organizer dashboard");
    }

    #[test]
    fn every_shell_starts_without_back_navigation() {
        for role in [Role::Attendee, Role::Speaker, Role::Organizer] {
            let shell = composed(role);
            assert!(!shell.can_navigate_back());
        }
    }
}
