//!
//! Roles of the accounts stored in the shared users collection.
//! Only regular users receive alerts.
//!

use strum::AsRefStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum UserRole {
    #[strum(serialize = "USER")]
    RegularUser,
}
