use anyhow::Context;
use clap::{Parser, Subcommand};

mod config;
use config::{figment, NotifierConfig, ReceiverConfig};

mod relay;
use relay::JsonEndpoint;

mod webhooks;
use webhooks::{mount_notifier, mount_receiver};

use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version)]
struct Opts {
    #[command(subcommand)]
    service: Service,
}

#[derive(Subcommand)]
enum Service {
    /// Receive GitHub star webhooks and forward new stars to the notifier
    Receiver(ReceiverConfig),
    /// Post star notifications to Slack
    Notifier(NotifierConfig),
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // a missing URL makes clap exit with an error before anything is bound
    let opts = Opts::parse();
    let client = reqwest::Client::builder()
        .build()
        .context("couldn't build HTTP client")?;

    let rocket = match opts.service {
        Service::Receiver(config) => {
            let notifications = JsonEndpoint::new(
                client,
                config.notification_service_url,
                "notification service",
            );
            info!(
                "webhook receiver starting on port {}, forwarding notifications to {}",
                config.port,
                notifications.url()
            );

            mount_receiver(
                rocket::custom(figment(config.address, config.port)),
                Box::new(notifications),
            )
        }
        Service::Notifier(config) => {
            let slack = JsonEndpoint::new(client, config.slack_webhook_url, "Slack");
            info!("notifier starting on port {}", config.port);

            mount_notifier(
                rocket::custom(figment(config.address, config.port)),
                Box::new(slack),
            )
        }
    };

    rocket
        .launch()
        .await
        .map(|_| ())
        .map_err(|err| anyhow::anyhow!("rocket failed to launch: {}", err))
}
