use crate::presenter::{self, Console};
use crate::ranker;
use crate::settings::Settings;
use anyhow::{anyhow, Result};
use hypixel::HttpClient;
use log::{debug, error, info, warn};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;

#[derive(Debug, PartialEq)]
pub(crate) enum CycleOutcome {
    Rendered(usize),
    Failed,
    Skipped,
}

/// Runs fetch, rank and render as one cycle, at most one at a time.
#[derive(Clone)]
pub(crate) struct Flipper {
    http: HttpClient,
    api_key: Arc<str>,
    settings: Arc<Settings>,
    console: Console,
    /// Held for the whole of a cycle
    cycle: Arc<Mutex<()>>,
}

impl Flipper {
    pub(crate) fn new(http: HttpClient, api_key: String, settings: Settings) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            settings: Arc::new(settings),
            console: Console,
            cycle: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) async fn tick(&self) -> CycleOutcome {
        let Ok(_guard) = self.cycle.try_lock() else {
            warn!("Previous cycle still running, skipping this tick");
            return CycleOutcome::Skipped;
        };

        match self.run_cycle().await {
            Ok(count) => CycleOutcome::Rendered(count),
            Err(e) => {
                error!("Cycle failed: {e}");
                CycleOutcome::Failed
            }
        }
    }

    async fn run_cycle(&self) -> Result<usize> {
        let records = self
            .http
            .fetch_snapshot(&self.api_key)
            .await
            .map_err(|e| anyhow!("Failed to fetch bazaar snapshot ({}): {e}", e.kind()))?;

        let top = ranker::rank(
            &records,
            self.settings.refresh_interval.as_secs_f64(),
            self.settings.top_n,
        );
        debug!("Ranked {} products, showing {}", records.len(), top.len());
        if top.is_empty() {
            warn!("Snapshot held no products to show");
        }

        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let screen = presenter::render(top.items(), &self.api_key, now);
        self.console.redraw(&screen)?;

        Ok(top.len())
    }

    pub(crate) async fn shutdown(&self) {
        let _guard = self.cycle.lock().await;
        info!("Flipper stopped");
    }
}
