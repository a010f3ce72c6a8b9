//! UI layer: shell composition, rendering and input sources.

mod banner;
mod event_source;
mod render;
pub mod shell;
mod styles;
mod terminal;
pub mod views;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
