//! Domain layer: core entities shared across views, controllers and observers.

pub mod activity;
pub mod conference;
pub mod events;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
