mod alert_insert_entity;

pub use alert_insert_entity::*;
