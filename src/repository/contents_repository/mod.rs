mod contents_repository;
mod contents_repository_impl;
mod entity;

pub use contents_repository::*;
pub use contents_repository_impl::*;
