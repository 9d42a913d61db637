use super::{entity::AlertInsertEntity, UsersRepository};
use crate::repository::{self, Alert, RecipientsFilter};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const USERS: &str = "users";
const INDEX_NAME_ROLE: &str = "index_role";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(USERS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "role": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_ROLE.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(collection = USERS, index = INDEX_NAME_ROLE, "ensured index");

        Ok(Self { database })
    }

    fn filter_document(filter: &RecipientsFilter) -> Document {
        let mut document = doc! {
            "role": filter.role.as_ref(),
        };

        if filter.vip_only {
            document.insert("vip", true);
        }

        // Missing and null birth dates never satisfy $lte
        if let Some(born_on_or_before) = filter.born_on_or_before {
            let cutoff = DateTime::from(born_on_or_before.midnight().assume_utc());
            document.insert("birth_date", doc! { "$lte": cutoff });
        }

        document
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn push_alert(
        &self,
        filter: &RecipientsFilter,
        alert: &Alert,
    ) -> Result<u64, repository::Error> {
        let alert = bson::to_bson(&AlertInsertEntity::from(alert))?;

        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_many(
                Self::filter_document(filter),
                doc! {
                    "$push": {
                        "alert_inbox": alert,
                    }
                },
            )
            .await?;

        Ok(update_result.modified_count)
    }
}
