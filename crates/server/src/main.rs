mod bootstrap;
mod health;
mod webhook;

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use fridgefix_core::config::{AppConfig, LoadOptions};
use tokio::sync::Notify;
use tracing::{error, info, warn};

use crate::bootstrap::Application;
use crate::webhook::WebhookState;

fn init_logging(config: &AppConfig) {
    use fridgefix_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

fn app_router(app: &Application) -> Router {
    webhook::router(WebhookState::new(Arc::clone(&app.engine), &app.config.twilio))
        .merge(health::router(Arc::clone(&app.engine)))
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Logging must be up before bootstrap emits anything
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "fridgefix-server listening for whatsapp webhooks"
    );

    let shutdown = Arc::new(Notify::new());
    let signal = Arc::clone(&shutdown);
    let server = axum::serve(listener, app_router(&app))
        .with_graceful_shutdown(async move {
            wait_for_shutdown().await;
            signal.notify_one();
        })
        .into_future();
    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);

    tokio::select! {
        result = server => result?,
        () = drain_deadline(shutdown, grace) => {
            warn!(
                event_name = "system.server.drain_timeout",
                correlation_id = "shutdown",
                grace_secs = grace.as_secs(),
                "in-flight requests did not finish before the shutdown deadline"
            );
        }
    }

    info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        "fridgefix-server stopping"
    );

    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "could not listen for shutdown signal"
        );
    }
}

async fn drain_deadline(shutdown: Arc<Notify>, grace: Duration) {
    shutdown.notified().await;
    tokio::time::sleep(grace).await;
}
