mod alerts_service_config;

pub use alerts_service_config::*;
