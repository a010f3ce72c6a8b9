use anyhow::Result;

use crate::domain::events::AppEvent;

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}
