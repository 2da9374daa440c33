use anyhow::Context;
use neethub_api::{AppState, Server};
use neethub_core::Settings;
use std::net::{IpAddr, SocketAddr};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neethub_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let ip: IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host '{}'", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);

    let state = AppState::new(settings)
        .await
        .context("failed to initialise application state")?;
    Server::new(state, addr).run().await
}
