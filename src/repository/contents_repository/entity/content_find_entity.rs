use crate::repository::{Content, ContentType};
use bson::{oid::ObjectId, Bson, DateTime};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Deserialize)]
pub struct ContentFindEntity {
    pub _id: ObjectId,

    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,

    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub vip_only: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_min_age")]
    pub min_age: u32,

    pub available_until: Option<DateTime>,
    pub expiring_alert_sent_at: Option<DateTime>,
    pub new_content_alert_sent_at: Option<DateTime>,
}

/// Accepts any BSON number, everything else and negative values mean no restriction
fn deserialize_min_age<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let min_age = match Option::<Bson>::deserialize(deserializer)? {
        Some(Bson::Int32(min_age)) => i64::from(min_age),
        Some(Bson::Int64(min_age)) => min_age,
        Some(Bson::Double(min_age)) => min_age as i64,
        _ => 0,
    };

    Ok(u32::try_from(min_age).unwrap_or(0))
}

impl From<ContentFindEntity> for Content {
    fn from(value: ContentFindEntity) -> Self {
        Self {
            id: Some(value._id),
            title: value.title.unwrap_or_default(),
            content_type: value
                .content_type
                .and_then(|content_type| ContentType::from_str(&content_type).ok()),
            visible: value.visible.unwrap_or(false),
            vip_only: value.vip_only.unwrap_or(false),
            min_age: value.min_age,
            available_until: value.available_until.map(OffsetDateTime::from),
            expiring_alert_sent_at: value.expiring_alert_sent_at.map(OffsetDateTime::from),
            new_content_alert_sent_at: value.new_content_alert_sent_at.map(OffsetDateTime::from),
        }
    }
}
