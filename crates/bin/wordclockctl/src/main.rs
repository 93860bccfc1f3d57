//! # wordclockctl — word clock control panel
//!
//! Composition root that wires the adapters together and runs one command.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and set up logging
//! - Parse the command line (`clap`)
//! - Construct the HTTP transport and the console notifier (adapters)
//! - Construct the panel service, injecting both via port traits
//! - Run the command and map its outcome to the exit status
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;
mod notifier;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordclock_adapter_http_reqwest::ReqwestTransport;
use wordclock_app::ports::{Notifier, Transport};
use wordclock_app::services::panel_service::PanelService;
use wordclock_domain::endpoint::RESTARTING_TO_CONNECT;
use wordclock_domain::outcome::Outcome;
use wordclock_domain::settings::{BrightnessSetting, TimezoneSetting, WifiCredential};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::notifier::ConsoleNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let Cli { command } = Cli::parse();
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let transport =
        ReqwestTransport::new(config.device.clone()).context("failed to set up HTTP client")?;
    let service = PanelService::new(transport, ConsoleNotifier)
        .with_color_policy(config.panel.color_policy());

    tracing::debug!(base_url = %config.device.base_url, "running command");
    let outcome = run(&service, command, &config).await;

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run<T, N>(service: &PanelService<T, N>, command: Command, config: &Config) -> Outcome
where
    T: Transport + 'static,
    N: Notifier + 'static,
{
    match command {
        Command::Color { value } => service.submit_color(&value).await,
        Command::Timezone { tz, no_auto_dst } => {
            service
                .submit_timezone(TimezoneSetting::new(tz, !no_auto_dst))
                .await
        }
        Command::Brightness { value, auto } => {
            service
                .submit_brightness(BrightnessSetting::new(auto, value))
                .await
        }
        Command::Control { action } => service.perform_control(action).await,
        Command::Connect { ssid, password } => {
            let request = service
                .submit_connect(WifiCredential::new(ssid, password))
                .await;
            // the device restarts instead of answering; a late answer is
            // still reported but does not change the exit status
            if tokio::time::timeout(config.panel.connect_grace(), request)
                .await
                .is_err()
            {
                tracing::debug!("no answer to connect request");
            }
            Outcome::ok(RESTARTING_TO_CONNECT)
        }
    }
}
