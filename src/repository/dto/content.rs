use super::ContentType;
use bson::oid::ObjectId;
use time::OffsetDateTime;

///
/// Content item as seen by the alert passes.
///
/// `id` is `None` only for items that were handed over
/// by the creation hook before being persisted.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub id: Option<ObjectId>,
    pub title: String,
    pub content_type: Option<ContentType>,
    pub visible: bool,
    pub vip_only: bool,
    pub min_age: u32,
    pub available_until: Option<OffsetDateTime>,
    pub expiring_alert_sent_at: Option<OffsetDateTime>,
    pub new_content_alert_sent_at: Option<OffsetDateTime>,
}
