use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Feed row as stored: channels joined into one string, datetime as text.
#[derive(Debug, Clone, FromRow)]
pub struct FeedEntity {
    pub id: i64,
    pub filepath: String,
    pub channels: String,
    pub datetime: String,
}

/// Feed item as exposed by `GET /feed`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub channels: Vec<String>,
    pub url: String,
    pub datetime: DateTime<Utc>,
}
