use crate::repository::{self, AlertKind, Content};
use axum::async_trait;
use bson::oid::ObjectId;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentsRepository: Send + Sync {
    ///
    /// Finds visible contents with `after < available_until <= until`
    /// that have not been alerted about expiring yet.
    /// Contents are sorted ascending by `available_until`.
    ///
    async fn find_many_expiring(
        &self,
        after: OffsetDateTime,
        until: OffsetDateTime,
    ) -> Result<Vec<Content>, repository::Error>;

    async fn find(&self, id: ObjectId) -> Result<Option<Content>, repository::Error>;

    ///
    /// Sets timestamp marking that alert of given kind was sent.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - content does not exist
    ///     - timestamp was already set
    ///
    async fn update_alert_sent_at(
        &self,
        id: ObjectId,
        kind: AlertKind,
        sent_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;
}
