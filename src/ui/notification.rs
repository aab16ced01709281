use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Transient messages that dismiss themselves after a fixed delay.
#[derive(Debug)]
pub struct Notifications {
    ttl: Duration,
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, now: Instant) {
        self.items.push_back(Notification {
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drops expired messages, returns whether anything was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        self.items.len() != before
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    /// Hides the message currently on screen.
    pub fn dismiss(&mut self) {
        self.items.pop_back();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_expire_after_ttl() {
        let start = Instant::now();
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.push_at("Song deleted successfully!", start);
        notifications.push_at("Song added to selected playlists!", start + Duration::from_secs(2));

        assert!(!notifications.prune(start + Duration::from_secs(1)));
        assert_eq!(notifications.len(), 2);
        assert_eq!(
            notifications.latest().map(|n| n.message.as_str()),
            Some("Song added to selected playlists!")
        );

        assert!(notifications.prune(start + Duration::from_secs(3)));
        assert_eq!(notifications.len(), 1);

        assert!(notifications.prune(start + Duration::from_secs(5)));
        assert!(notifications.is_empty());
    }

    #[test]
    fn dismiss_removes_newest() {
        let mut notifications = Notifications::new(Duration::from_secs(3));
        notifications.push("first");
        notifications.push("second");
        notifications.dismiss();
        assert_eq!(notifications.latest().map(|n| n.message.as_str()), Some("first"));
    }
}
