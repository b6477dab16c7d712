use std::net::IpAddr;

use clap::Args;
use rocket::figment::Figment;
use url::Url;

#[derive(Debug, Args)]
pub struct ReceiverConfig {
    /// URL of the notifier's `/notify` endpoint, where star events get forwarded
    #[arg(long, env = "NOTIFICATION_SERVICE_URL")]
    pub notification_service_url: Url,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

#[derive(Debug, Args)]
pub struct NotifierConfig {
    /// Slack incoming webhook the formatted messages are posted to
    #[arg(long, env = "SLACK_WEBHOOK_URL")]
    pub slack_webhook_url: Url,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8081)]
    pub port: u16,
}

/// Rocket's default configuration with our bind address and port merged on top.
pub fn figment(address: IpAddr, port: u16) -> Figment {
    rocket::Config::figment()
        .merge(("address", address))
        .merge(("port", port))
}
