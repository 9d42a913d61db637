use super::{AlertsService, AlertsServiceConfig};
use crate::{
    error::Error,
    repository::{
        self, Alert, AlertKind, Content, ContentsRepository, RecipientsFilter, UsersRepository,
    },
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use time::OffsetDateTime;

pub struct AlertsServiceImpl {
    config: AlertsServiceConfig,
    contents_repository: Arc<dyn ContentsRepository>,
    users_repository: Arc<dyn UsersRepository>,
}

impl AlertsServiceImpl {
    pub fn new(
        config: AlertsServiceConfig,
        contents_repository: Arc<dyn ContentsRepository>,
        users_repository: Arc<dyn UsersRepository>,
    ) -> Self {
        Self {
            config,
            contents_repository,
            users_repository,
        }
    }

    ///
    /// Appends alert about the content to every eligible mailbox
    /// and marks content as alerted.
    ///
    /// ### Returns
    /// Number of modified mailboxes
    ///
    /// ### Errors
    /// - [Error::Validation] when content has no id
    /// - [Error::Database] when alert could not be appended
    ///
    #[tracing::instrument(skip_all, fields(content_id = ?content.id, kind = kind.as_ref()))]
    async fn send_alert(
        &self,
        content: &Content,
        kind: AlertKind,
        now: OffsetDateTime,
    ) -> Result<u64, Error> {
        let content_id = content
            .id
            .ok_or(Error::Validation("content has no id"))?;

        let alert = Alert::new(kind, content_id, content, now);
        let filter = RecipientsFilter::for_content(content, now.date());
        tracing::debug!(alert_id = %alert.id, ?filter, "appending alert to mailboxes");

        let modified = self.users_repository.push_alert(&filter, &alert).await?;
        tracing::info!(modified, "appended alert to mailboxes");

        // Count stands even when marking fails
        match self
            .contents_repository
            .update_alert_sent_at(content_id, kind, now)
            .await
        {
            Ok(()) => tracing::debug!("marked content as alerted"),
            Err(repository::Error::NoDocumentUpdated) => {
                tracing::warn!("content was already marked as alerted")
            }
            Err(err) => tracing::error!(%err, "failed to mark content as alerted"),
        }

        Ok(modified)
    }
}

#[async_trait]
impl AlertsService for AlertsServiceImpl {
    #[tracing::instrument(name = "Expiring Content Alerts", skip_all)]
    async fn generate_expiring_content_alerts(&self) -> u64 {
        let now = OffsetDateTime::now_utc();
        let limit = now + self.config.expiring_lookahead;

        tracing::info!(%limit, "finding expiring contents");
        let contents = match self.contents_repository.find_many_expiring(now, limit).await {
            Ok(contents) => contents,
            Err(err) => {
                tracing::error!(%err, "failed to find expiring contents");
                return 0;
            }
        };
        tracing::info!(count = contents.len(), "found expiring contents");

        let mut created = 0;
        for content in contents {
            match self
                .send_alert(&content, AlertKind::ContentExpiring, now)
                .await
            {
                Ok(modified) => created += modified,
                Err(err) => tracing::error!(
                    content_id = ?content.id,
                    %err,
                    "failed to create expiring content alerts"
                ),
            }
        }

        tracing::info!(created, "created expiring content alerts");

        created
    }

    #[tracing::instrument(name = "New Content Alert", skip_all)]
    async fn generate_new_content_alert(&self, content: Option<Content>) -> u64 {
        let Some(content) = content else {
            tracing::warn!("content missing, no alerts generated");
            return 0;
        };

        let Some(content_id) = content.id else {
            tracing::warn!("content has no id, no alerts generated");
            return 0;
        };

        if !content.visible {
            tracing::info!(%content_id, "content not visible, no alerts generated");
            return 0;
        }

        if content.new_content_alert_sent_at.is_some() {
            tracing::info!(%content_id, "content already announced, no alerts generated");
            return 0;
        }

        let now = OffsetDateTime::now_utc();
        match self.send_alert(&content, AlertKind::NewContent, now).await {
            Ok(created) => {
                tracing::info!(%content_id, created, "created new content alerts");
                created
            }
            Err(err) => {
                tracing::error!(%content_id, %err, "failed to create new content alerts");
                0
            }
        }
    }

    async fn generate_new_content_alert_by_id(&self, content_id: ObjectId) -> Result<u64, Error> {
        tracing::info!(%content_id, "finding content");

        let content = self.contents_repository.find(content_id).await?;

        Ok(self.generate_new_content_alert(content).await)
    }
}
