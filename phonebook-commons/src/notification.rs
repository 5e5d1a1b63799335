use std::time::Duration;

use crate::model::Notification;

pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

/// Identifies one shown notification. Expiry requests carrying an older ticket are ignored.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerState {
    Idle,
    Showing { notification: Notification, ticket: Ticket },
}

/// Transient feedback line, at most one notification visible at a time.
///
/// Showing a notification always supersedes the current one and hands out a new ticket, the
/// owner (re)starts its single timer for [`Banner::timeout`] and reports back via
/// [`Banner::expire`].
#[derive(Clone, Debug)]
pub struct Banner {
    state: BannerState,
    last_ticket: Ticket,
    timeout: Duration,
}

impl Default for Banner {
    fn default() -> Self {
        Banner::new(DEFAULT_NOTIFICATION_TIMEOUT)
    }
}

impl Banner {
    pub fn new(timeout: Duration) -> Banner {
        Banner { state: BannerState::Idle, last_ticket: 0, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn state(&self) -> &BannerState {
        &self.state
    }

    pub fn current(&self) -> Option<&Notification> {
        match &self.state {
            BannerState::Idle => None,
            BannerState::Showing { notification, .. } => Some(notification),
        }
    }

    pub fn show(&mut self, notification: Notification) -> Ticket {
        self.last_ticket += 1;
        self.state = BannerState::Showing { notification, ticket: self.last_ticket };
        self.last_ticket
    }

    /// Returns true if the banner went idle
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match self.state {
            BannerState::Showing { ticket: current, .. } if current == ticket => {
                self.state = BannerState::Idle;
                true
            }
            _ => false,
        }
    }
}
