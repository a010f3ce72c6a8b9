//! Navigation and event mediation: the view stack, the per-role observer
//! registry, and the view contract the shells compose.

pub mod mediator;
pub mod stack;
pub mod view;

/// Returns the nav module name for smoke checks.
pub fn module_name() -> &'static str {
    "nav"
}
