use bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::{Client, Database};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Once;
use time::{Duration, OffsetDateTime};

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("MEDIA_ALERTS_BIND_ADDRESS").unwrap()
}

///
/// Connects to the same database the running server uses
/// and removes all contents and users from it
///
pub async fn clean_database() -> Database {
    let connection_string = std::env::var("MEDIA_ALERTS_DB_CONNECTION_STRING").unwrap();
    let db_name = std::env::var("MEDIA_ALERTS_DB_NAME").unwrap();

    let client = Client::with_uri_str(connection_string).await.unwrap();
    let database = client.database(&db_name);

    database
        .collection::<Document>("contents")
        .delete_many(doc! {})
        .await
        .unwrap();
    database
        .collection::<Document>("users")
        .delete_many(doc! {})
        .await
        .unwrap();

    database
}

pub fn years_ago(years: i64) -> DateTime {
    let date = (OffsetDateTime::now_utc() - Duration::days(years * 365)).date();

    DateTime::from(date.midnight().assume_utc())
}

pub fn days_from_now(days: i64) -> DateTime {
    DateTime::from(OffsetDateTime::now_utc() + Duration::days(days))
}

pub async fn insert_user(database: &Database, vip: bool, birth_date: DateTime) -> ObjectId {
    database
        .collection::<Document>("users")
        .insert_one(doc! {
            "role": "USER",
            "vip": vip,
            "birth_date": birth_date,
            "alert_inbox": [],
        })
        .await
        .unwrap()
        .inserted_id
        .as_object_id()
        .unwrap()
}

pub async fn insert_scenario_users(database: &Database) -> [ObjectId; 3] {
    [
        insert_user(database, true, years_ago(36)).await,
        insert_user(database, false, years_ago(16)).await,
        insert_user(database, false, years_ago(46)).await,
    ]
}

pub async fn insert_content(database: &Database, content: Document) -> ObjectId {
    database
        .collection::<Document>("contents")
        .insert_one(content)
        .await
        .unwrap()
        .inserted_id
        .as_object_id()
        .unwrap()
}

pub async fn find_content(database: &Database, id: ObjectId) -> Document {
    database
        .collection::<Document>("contents")
        .find_one(doc! { "_id": id })
        .await
        .unwrap()
        .unwrap()
}

pub async fn inbox(database: &Database, user_id: ObjectId) -> Vec<Document> {
    let user = database
        .collection::<Document>("users")
        .find_one(doc! { "_id": user_id })
        .await
        .unwrap()
        .unwrap();

    user.get_array("alert_inbox")
        .unwrap()
        .iter()
        .map(|alert| alert.as_document().unwrap().clone())
        .collect()
}

pub async fn post_created(path: &str) -> u64 {
    let response = reqwest::Client::new()
        .post(format!("http://{}{}", address(), path))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response_body = response.bytes().await.unwrap();
    let response_body = serde_json::from_slice::<Value>(&response_body).unwrap();

    response_body.get("created").unwrap().as_u64().unwrap()
}
