mod credentials;
mod cycle;
mod presenter;
mod ranker;
mod scheduler;
mod settings;

use anyhow::Result;
use cycle::Flipper;
use hypixel::HttpClient;
use scheduler::Scheduler;
use settings::Settings;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = common::setup_env();
    let settings = Settings::from_env(env_file)?;

    let http = HttpClient::with_base_url(&settings.base_url, settings.request_timeout)?;
    let api_key = credentials::ensure_api_key(&http, &settings.env_file).await?;
    let flipper = Flipper::new(http, api_key, settings);

    flipper.tick().await;

    let scheduler = Scheduler::new().await?;
    scheduler.setup_jobs(flipper.clone()).await?;
    scheduler.start().await?;
    signal::ctrl_c().await?;
    scheduler.shutdown().await?;
    flipper.shutdown().await;

    Ok(())
}
