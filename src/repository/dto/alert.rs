use super::{AlertKind, Content};
use bson::oid::ObjectId;
use time::OffsetDateTime;
use uuid::Uuid;

///
/// Snapshot of the content taken when the alert is created.
/// The same value is appended to every recipient's mailbox.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub id: Uuid,
    pub kind: AlertKind,
    pub content_id: ObjectId,
    pub content_title: String,
    pub message: String,
    pub vip_only: bool,
    pub min_age: u32,
    pub created_at: OffsetDateTime,
    pub available_until: Option<OffsetDateTime>,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        content_id: ObjectId,
        content: &Content,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content_id,
            content_title: content.title.clone(),
            message: kind.message(content),
            vip_only: content.vip_only,
            min_age: content.min_age,
            created_at,
            available_until: content.available_until,
        }
    }
}
