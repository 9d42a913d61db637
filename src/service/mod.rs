pub mod alerts_service;
