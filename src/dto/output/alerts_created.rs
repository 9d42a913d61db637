use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AlertsCreated {
    /// Number of mailboxes the alerts were appended to
    pub created: u64,
}
