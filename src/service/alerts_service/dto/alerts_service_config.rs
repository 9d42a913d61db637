use std::time::Duration;

pub struct AlertsServiceConfig {
    /// How far ahead contents are checked for expiration
    pub expiring_lookahead: Duration,
}
