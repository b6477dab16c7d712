use serde::Deserialize;
use serde_json::Value;

use crate::{
    relay::NotificationRequest,
    webhooks::github::events::{is_present, string_field},
};

/// Payload of GitHub's `star` webhook. Fields are kept loosely typed so that any JSON object is
/// accepted: what doesn't look like a star creation is acknowledged and dropped, not rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StarEvent {
    pub action: Option<Value>,
    pub repository: Option<Value>,
    pub sender: Option<Value>,
}

impl StarEvent {
    /// The action, if it is a string.
    pub fn action(&self) -> Option<&str> {
        self.action.as_ref().and_then(Value::as_str)
    }

    /// The notification to forward, if this event is a star being added by someone on some
    /// repository.
    ///
    /// Only the presence of `repository` and `sender` is checked. A missing `name` or `login` is
    /// forwarded as is and left for the notifier to reject.
    pub fn created_star(&self) -> Option<NotificationRequest> {
        if self.action() != Some("created") {
            return None;
        }

        let repository = self.repository.as_ref().filter(|v| is_present(v))?;
        let sender = self.sender.as_ref().filter(|v| is_present(v))?;

        Some(NotificationRequest {
            repo: string_field(repository, "name"),
            user: string_field(sender, "login"),
        })
    }
}
