use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use url::Url;

mod message_builder;
pub use message_builder::{Block, MessageBuilder, SlackMessage, TextObject};

mod slack;
pub use slack::star_notification;

/// What the receiver sends to the notifier for every new star. Whatever the receiver couldn't
/// extract is left out of the JSON body, the notifier decides whether that's acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl NotificationRequest {
    /// Empty strings count as missing.
    pub fn into_star(self) -> Option<Star> {
        let repo = self.repo.filter(|repo| !repo.is_empty())?;
        let user = self.user.filter(|user| !user.is_empty())?;

        Some(Star { repo, user })
    }
}

/// A complete notification: a repository and the user who starred it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    pub repo: String,
    pub user: String,
}

/// Outbound hop of the receiver: hands a star over to the notifier.
#[rocket::async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify(&self, request: &NotificationRequest) -> anyhow::Result<()>;
}

/// Outbound hop of the notifier: posts a formatted message into the chat.
#[rocket::async_trait]
pub trait ChatWebhook: Send + Sync {
    async fn post(&self, message: &SlackMessage) -> anyhow::Result<()>;
}

/// A downstream service reached by POSTing JSON to a fixed URL.
///
/// Anything but a 2xx answer counts as a failure. There are no retries, the caller decides what to
/// do with the error.
pub struct JsonEndpoint {
    client: Client,
    url: Url,
    name: &'static str,
}

impl JsonEndpoint {
    /// `name` only shows up in logs and error messages.
    pub fn new(client: Client, url: Url, name: &'static str) -> Self {
        Self { client, url, name }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn post_json<T: Serialize + Sync>(&self, body: &T) -> anyhow::Result<()> {
        trace!("POST {} ({})", self.url, self.name);

        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .await
            .with_context(|| format!("couldn't reach {} at {}", self.name, self.url))?;

        let status = response.status();
        response
            .error_for_status()
            .with_context(|| format!("{} answered with {}", self.name, status))?;

        debug!("{} answered with {}", self.name, status);
        Ok(())
    }
}

#[rocket::async_trait]
impl NotificationService for JsonEndpoint {
    async fn notify(&self, request: &NotificationRequest) -> anyhow::Result<()> {
        self.post_json(request).await
    }
}

#[rocket::async_trait]
impl ChatWebhook for JsonEndpoint {
    async fn post(&self, message: &SlackMessage) -> anyhow::Result<()> {
        self.post_json(message).await
    }
}
