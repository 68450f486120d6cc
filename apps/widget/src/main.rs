use std::sync::Arc;
use anyhow::Result;
use dotenv::dotenv;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod session;
mod terminal;

use booking_form_cell::BookingWidget;
use shared_api::BookingApiClient;
use shared_config::AppConfig;
use shared_utils::SystemClock;
use terminal::{TerminalSurface, TerminalView};

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    info!("Starting booking widget against {}", config.api_base_url);

    let widget = Arc::new(BookingWidget::new(
        &config,
        Arc::new(BookingApiClient::new(&config)),
        Arc::new(TerminalView),
        Arc::new(SystemClock),
        Some(Arc::new(TerminalSurface)),
    ));

    println!("{}", commands::HELP);
    session::run_session(widget, BufReader::new(tokio::io::stdin())).await?;

    info!("Booking widget closed");
    Ok(())
}
