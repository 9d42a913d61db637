//!
//! Module with all dtos that are passed between server and callers
//!

pub mod output;
