mod alert;
mod alert_kind;
mod content;
mod content_type;
mod recipients_filter;
mod user_role;

pub use alert::*;
pub use alert_kind::*;
pub use content::*;
pub use content_type::*;
pub use recipients_filter::*;
pub use user_role::*;
