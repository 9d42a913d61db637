use super::{create_scheduler, ApplicationEnv};
use crate::{
    repository::{ContentsRepositoryImpl, UsersRepositoryImpl},
    service::alerts_service::{AlertsService, AlertsServiceConfig, AlertsServiceImpl},
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub alerts_service: Arc<dyn AlertsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub scheduler: JobScheduler,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let contents_repository = ContentsRepositoryImpl::new(db.clone()).await?;
    let contents_repository = Arc::new(contents_repository);

    let users_repository = UsersRepositoryImpl::new(db).await?;
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let config = AlertsServiceConfig {
        expiring_lookahead: env.expiring_alerts_lookahead,
    };
    let alerts_service = AlertsServiceImpl::new(config, contents_repository, users_repository);
    let alerts_service: Arc<dyn AlertsService> = Arc::new(alerts_service);

    tracing::info!("creating scheduler");
    let scheduler = create_scheduler(env, alerts_service.clone()).await?;

    Ok((
        ApplicationState { alerts_service },
        ApplicationStateToClose {
            db_client,
            scheduler,
        },
    ))
}
