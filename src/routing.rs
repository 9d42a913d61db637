use crate::{
    application::ApplicationState, dto::output, error::Error,
    service::alerts_service::AlertsService,
};
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route(
            "/internal/alerts/trigger-expiring",
            post(trigger_expiring_content_alerts),
        )
        .route(
            "/internal/alerts/new-content/:content_id",
            post(trigger_new_content_alert),
        )
}

async fn trigger_expiring_content_alerts(
    State(alerts_service): State<Arc<dyn AlertsService>>,
) -> Json<output::AlertsCreated> {
    let created = alerts_service.generate_expiring_content_alerts().await;

    Json(output::AlertsCreated { created })
}

async fn trigger_new_content_alert(
    State(alerts_service): State<Arc<dyn AlertsService>>,
    Path(content_id): Path<String>,
) -> Result<Json<output::AlertsCreated>, Error> {
    let content_id =
        ObjectId::parse_str(&content_id).map_err(|_| Error::Validation("invalid content id"))?;

    let created = alerts_service
        .generate_new_content_alert_by_id(content_id)
        .await?;

    Ok(Json(output::AlertsCreated { created }))
}
