use rocket::{routes, Build, Rocket};

use crate::relay::{ChatWebhook, NotificationService};

pub mod github;
pub use github::github_webhook;

pub mod notifier;
pub use notifier::notify;

/// Where the receiver forwards star creations.
pub struct Notifications(pub Box<dyn NotificationService>);

/// Where the notifier posts its messages.
pub struct Chat(pub Box<dyn ChatWebhook>);

/// Mounts the GitHub webhook receiver on `rocket`.
pub fn mount_receiver(
    rocket: Rocket<Build>,
    notifications: Box<dyn NotificationService>,
) -> Rocket<Build> {
    rocket
        .mount("/", routes![github_webhook])
        .manage(Notifications(notifications))
}

/// Mounts the chat notifier on `rocket`.
pub fn mount_notifier(rocket: Rocket<Build>, chat: Box<dyn ChatWebhook>) -> Rocket<Build> {
    rocket.mount("/", routes![notify]).manage(Chat(chat))
}
