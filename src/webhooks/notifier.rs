use rocket::{http::Status, serde::json::Json, State};
use tracing::{error, info, trace, warn};

use crate::{
    relay::{star_notification, NotificationRequest},
    webhooks::Chat,
};

#[rocket::post("/notify", data = "<payload>")]
pub async fn notify(
    payload: Json<NotificationRequest>,
    chat: &State<Chat>,
) -> (Status, &'static str) {
    trace!("payload: {:?}", payload.0);

    let star = match payload.into_inner().into_star() {
        Some(star) => star,
        None => {
            warn!("received incomplete notification request, ignoring");
            return (Status::BadRequest, "Bad Request: Missing repo or user.");
        }
    };

    info!(
        "notification request received for repo: {} by user: {}",
        star.repo, star.user
    );

    let message = star_notification(&star);
    match chat.0.post(&message).await {
        Ok(()) => {
            info!("notification sent to Slack");
            (Status::Ok, "Notification sent.")
        }
        Err(e) => {
            error!("error sending notification to Slack: {:#}", e);
            (
                Status::InternalServerError,
                "Error sending notification to Slack.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
    };
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

    use crate::relay::{ChatWebhook, SlackMessage};

    /// Records every message as JSON, then answers as configured.
    struct FakeSlack {
        messages: UnboundedSender<String>,
        fail: bool,
    }

    #[rocket::async_trait]
    impl ChatWebhook for FakeSlack {
        async fn post(&self, message: &SlackMessage) -> anyhow::Result<()> {
            self.messages.send(serde_json::to_string(message)?)?;
            if self.fail {
                Err(anyhow!("Slack answered with 500 Internal Server Error"))
            } else {
                Ok(())
            }
        }
    }

    async fn client(fail: bool) -> (Client, UnboundedReceiver<String>) {
        let (messages, receiver) = unbounded_channel();
        let rocket =
            crate::webhooks::mount_notifier(rocket::build(), Box::new(FakeSlack { messages, fail }));

        let client = Client::tracked(rocket)
            .await
            .expect("valid rocket instance");
        (client, receiver)
    }

    fn drain(receiver: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut messages = Vec::new();
        while let Ok(message) = receiver.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[rocket::async_test]
    async fn notification_is_sent() {
        let (client, mut messages) = client(false).await;

        let response = client
            .post("/notify")
            .header(ContentType::JSON)
            .body(r#"{ "repo": "acme/widgets", "user": "octocat" }"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("Notification sent.")
        );

        let messages = drain(&mut messages);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("acme/widgets"));
        assert!(messages[0].contains("octocat"));
    }

    #[rocket::async_test]
    async fn missing_user_is_rejected() {
        let (client, mut messages) = client(false).await;

        let response = client
            .post("/notify")
            .header(ContentType::JSON)
            .body(r#"{ "repo": "acme/widgets" }"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("Bad Request: Missing repo or user.")
        );
        assert!(drain(&mut messages).is_empty());
    }

    #[rocket::async_test]
    async fn empty_repo_is_rejected() {
        let (client, mut messages) = client(false).await;

        let response = client
            .post("/notify")
            .header(ContentType::JSON)
            .body(r#"{ "repo": "", "user": "octocat" }"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert!(drain(&mut messages).is_empty());
    }

    #[rocket::async_test]
    async fn slack_failure_is_a_server_error() {
        let (client, mut messages) = client(true).await;

        let response = client
            .post("/notify")
            .header(ContentType::JSON)
            .body(r#"{ "repo": "acme/widgets", "user": "octocat" }"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("Error sending notification to Slack.")
        );
        // tried exactly once, no retry
        assert_eq!(drain(&mut messages).len(), 1);
    }
}
