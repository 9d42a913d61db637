use crate::{error::Error, repository::Content};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertsService: Send + Sync {
    ///
    /// Appends CONTENT_EXPIRING alert to mailboxes of eligible users
    /// for every visible content that expires soon and was not alerted about yet.
    /// Failures are logged and isolated to the content they happened for.
    ///
    /// ### Returns
    /// Number of modified mailboxes summed over all contents
    ///
    async fn generate_expiring_content_alerts(&self) -> u64;

    ///
    /// Appends NEW_CONTENT alert to mailboxes of eligible users.
    /// Nothing is sent when content is missing, has no id,
    /// is not visible or was already announced.
    ///
    /// ### Returns
    /// Number of modified mailboxes
    ///
    async fn generate_new_content_alert(&self, content: Option<Content>) -> u64;

    ///
    /// Finds content and generates NEW_CONTENT alert for it.
    ///
    /// ### Errors
    /// - [Error::Database] when content could not be fetched
    ///
    async fn generate_new_content_alert_by_id(&self, content_id: ObjectId) -> Result<u64, Error>;
}
