use crate::cycle::Flipper;
use anyhow::Result;
use tokio_cron_scheduler::{Job, JobScheduler};

pub(crate) struct Scheduler {
    scheduler: JobScheduler,
}

impl Scheduler {
    pub(crate) async fn new() -> Result<Self> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self { scheduler })
    }

    /// Registers the refresh job, firing every refresh interval.
    pub(crate) async fn setup_jobs(&self, flipper: Flipper) -> Result<()> {
        let period = flipper.settings().refresh_interval;
        let job = Job::new_repeated_async(period, move |_uuid, _l| {
            let flipper = flipper.clone();
            Box::pin(async move {
                let outcome = flipper.tick().await;
                log::debug!("Scheduled tick finished: {outcome:?}");
            })
        })?;

        self.scheduler.add(job).await?;
        Ok(())
    }

    pub(crate) async fn start(&self) -> Result<()> {
        self.scheduler.start().await?;
        Ok(())
    }

    pub(crate) async fn shutdown(mut self) -> Result<()> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}
