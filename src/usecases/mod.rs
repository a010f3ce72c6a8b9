//! Use case layer: bootstrap, shell composition and event observers.

pub mod bootstrap;
pub mod compose;
pub mod context;
pub mod contracts;
pub mod observers;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
