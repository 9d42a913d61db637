use super::ApplicationEnv;
use crate::service::alerts_service::AlertsService;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

pub async fn create_scheduler(
    env: &ApplicationEnv,
    alerts_service: Arc<dyn AlertsService>,
) -> anyhow::Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(env.expiring_alerts_schedule.as_str(), move |_uuid, _lock| {
        let alerts_service = alerts_service.clone();
        Box::pin(run_expiring_content_alerts(alerts_service))
    })?;
    scheduler.add(job).await?;

    scheduler.start().await?;
    tracing::info!(
        schedule = %env.expiring_alerts_schedule,
        "expiring content alerts scheduled"
    );

    Ok(scheduler)
}

///
/// Runs expiring content alerts pass in its own task.
/// A panic inside the pass is logged and never reaches the scheduler.
///
pub async fn run_expiring_content_alerts(alerts_service: Arc<dyn AlertsService>) {
    tracing::info!("scheduled expiring content alerts started");

    let task =
        tokio::spawn(async move { alerts_service.generate_expiring_content_alerts().await });

    match task.await {
        Ok(created) => tracing::info!(created, "scheduled expiring content alerts finished"),
        Err(err) => tracing::error!(%err, "scheduled expiring content alerts failed"),
    }
}
