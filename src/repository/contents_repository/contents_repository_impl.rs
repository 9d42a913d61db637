use super::{entity::ContentFindEntity, ContentsRepository};
use crate::repository::{self, AlertKind, Content, Error};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};
use time::OffsetDateTime;

const CONTENTS: &str = "contents";
const INDEX_NAME_AVAILABLE_UNTIL: &str = "index_available_until";

pub struct ContentsRepositoryImpl {
    database: Database,
}

impl ContentsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        // Collection is owned by the catalog service, only the index is ensured here
        database
            .collection::<Document>(CONTENTS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "available_until": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_AVAILABLE_UNTIL.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(
            collection = CONTENTS,
            index = INDEX_NAME_AVAILABLE_UNTIL,
            "ensured index"
        );

        Ok(Self { database })
    }

    fn sent_at_field(kind: AlertKind) -> &'static str {
        match kind {
            AlertKind::NewContent => "new_content_alert_sent_at",
            AlertKind::ContentExpiring => "expiring_alert_sent_at",
        }
    }
}

#[async_trait]
impl ContentsRepository for ContentsRepositoryImpl {
    async fn find_many_expiring(
        &self,
        after: OffsetDateTime,
        until: OffsetDateTime,
    ) -> Result<Vec<Content>, repository::Error> {
        let mut cursor = self
            .database
            .collection::<Document>(CONTENTS)
            .find(doc! {
                "available_until": {
                    "$gt": DateTime::from(after),
                    "$lte": DateTime::from(until),
                },
                "expiring_alert_sent_at": None as Option<DateTime>,
                "visible": true,
            })
            .sort(doc! { "available_until": 1 })
            .await?;

        // Malformed documents are skipped one by one
        let mut contents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            let content_id = document.get("_id").cloned();
            match bson::from_document::<ContentFindEntity>(document) {
                Ok(entity) => contents.push(Content::from(entity)),
                Err(err) => tracing::warn!(?content_id, %err, "skipping malformed content"),
            }
        }

        Ok(contents)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Content>, repository::Error> {
        let content = self
            .database
            .collection::<ContentFindEntity>(CONTENTS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Content::from);

        Ok(content)
    }

    async fn update_alert_sent_at(
        &self,
        id: ObjectId,
        kind: AlertKind,
        sent_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let field = Self::sent_at_field(kind);

        let mut filter = doc! { "_id": id };
        filter.insert(field, None as Option<DateTime>);

        let mut set = Document::new();
        set.insert(field, DateTime::from(sent_at));

        let update_result = self
            .database
            .collection::<Document>(CONTENTS)
            .update_one(filter, doc! { "$set": set })
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
