use std::time::{Duration, Instant};

/// Transient welcome banner. It is shown once at shell construction and
/// dismissed the first time a tick observes its deadline has passed; nothing
/// blocks waiting for it.
pub struct Banner {
    message: Option<String>,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl Banner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            message: None,
            deadline: None,
            timeout,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.deadline = Some(now + self.timeout);
    }

    /// Drops the message once its deadline has passed. Dismissing an already
    /// hidden banner is harmless.
    pub fn dismiss_expired(&mut self, now: Instant) {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.message = None;
            self.deadline = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_visible_until_its_deadline() {
        let start = Instant::now();
        let mut banner = Banner::new(Duration::from_millis(500));
        banner.show("Welcome, Ada!", start);

        banner.dismiss_expired(start + Duration::from_millis(499));
        assert_eq!(banner.message(), Some("Welcome, Ada!"));

        banner.dismiss_expired(start + Duration::from_millis(500));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn dismissing_a_hidden_banner_is_harmless() {
        let mut banner = Banner::new(Duration::from_millis(100));

        banner.dismiss_expired(Instant::now());

        assert_eq!(banner.message(), None);
    }

    #[test]
    fn showing_again_resets_the_deadline() {
        let start = Instant::now();
        let mut banner = Banner::new(Duration::from_millis(100));
        banner.show("first", start);
        banner.show("second", start + Duration::from_millis(90));

        banner.dismiss_expired(start + Duration::from_millis(120));

        assert_eq!(banner.message(), Some("second"));
    }
}
