use crate::repository::{self, Alert, RecipientsFilter};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersRepository: Send + Sync {
    ///
    /// Appends alert to the mailbox of every user matching the filter.
    ///
    /// ### Returns
    /// number of modified users
    ///
    async fn push_alert(
        &self,
        filter: &RecipientsFilter,
        alert: &Alert,
    ) -> Result<u64, repository::Error>;
}
