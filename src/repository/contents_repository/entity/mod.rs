mod content_find_entity;

pub use content_find_entity::*;
