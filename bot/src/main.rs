mod config;
mod scheduler;
mod status_log;

use crate::config::BotConfig;
use crate::scheduler::Scheduler;
use anyhow::Result;
use log::info;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();

    let config = BotConfig::from_env()?;
    let credentials = twitter::Credentials::from_env()?;
    let scheduler = Scheduler::new(config, credentials);

    tokio::select! {
        _ = scheduler.run() => {}
        _ = signal::ctrl_c() => info!("Shutting down"),
    }

    Ok(())
}
