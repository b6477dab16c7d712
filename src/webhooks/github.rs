use rocket::{http::Status, serde::json::Json, State};
use tracing::{error, info, trace};

pub mod events;
use events::StarEvent;

use crate::webhooks::Notifications;

#[rocket::post("/", data = "<payload>")]
pub async fn github_webhook(
    payload: Json<StarEvent>,
    notifications: &State<Notifications>,
) -> (Status, &'static str) {
    info!("webhook received from GitHub");
    trace!("payload: {:?}", payload.0);

    let event = payload.into_inner();
    let request = match event.created_star() {
        Some(request) => request,
        None => {
            info!(
                "received non-star-creation event (action: {:?}), ignoring",
                event.action
            );
            return (Status::Accepted, "Event received but not processed.");
        }
    };

    info!(
        "star created for repo: {:?} by user: {:?}",
        request.repo, request.user
    );

    match notifications.0.notify(&request).await {
        Ok(()) => {
            info!("notification request forwarded to notification service");
            (Status::Ok, "Webhook received and forwarded.")
        }
        Err(e) => {
            error!("error forwarding webhook to notification service: {:#}", e);
            (Status::InternalServerError, "Error forwarding webhook.")
        }
    }
}
