mod contents_repository;
mod dto;
mod error;
mod users_repository;

pub use contents_repository::*;
pub use dto::*;
pub use error::*;
pub use users_repository::*;
