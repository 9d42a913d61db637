use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub expiring_alerts_lookahead: Duration,
    /// Cron expression with seconds field, evaluated in UTC
    pub expiring_alerts_schedule: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MEDIA_ALERTS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MEDIA_ALERTS_LOG_FILENAME")?;
        let bind_address = Self::env_var("MEDIA_ALERTS_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("MEDIA_ALERTS_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("MEDIA_ALERTS_DB_NAME")?;
        let expiring_alerts_lookahead: u64 =
            Self::env_var("MEDIA_ALERTS_EXPIRING_LOOKAHEAD_DAYS")?.parse()?;
        let expiring_alerts_lookahead =
            Duration::from_secs(expiring_alerts_lookahead * SECONDS_PER_DAY);
        let expiring_alerts_schedule = Self::env_var("MEDIA_ALERTS_EXPIRING_SCHEDULE")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            expiring_alerts_lookahead,
            expiring_alerts_schedule,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
