use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

use crate::infra::contracts::Clock;

#[cfg(test)]
use anyhow::Result;

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Hand-driven clock for tests. Clones share the same offset, so a test can
/// keep one handle while the shell owns another.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Clone)]
pub struct ManualClock {
    start: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }
}

#[cfg_attr(not(test), allow(dead_code))]
impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }
}
