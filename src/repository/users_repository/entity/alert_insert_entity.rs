use crate::repository::Alert;
use bson::{oid::ObjectId, DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct AlertInsertEntity<'a> {
    pub id: Uuid,
    pub kind: &'a str,

    pub content_id: ObjectId,
    pub content_title: &'a str,
    pub message: &'a str,

    pub vip_only: bool,
    pub min_age: i64,

    pub created_at: DateTime,
    pub available_until: Option<DateTime>,
}

impl<'a> From<&'a Alert> for AlertInsertEntity<'a> {
    fn from(value: &'a Alert) -> Self {
        Self {
            id: value.id.into(),
            kind: value.kind.as_ref(),
            content_id: value.content_id,
            content_title: &value.content_title,
            message: &value.message,
            vip_only: value.vip_only,
            min_age: value.min_age.into(),
            created_at: value.created_at.into(),
            available_until: value.available_until.map(DateTime::from),
        }
    }
}
