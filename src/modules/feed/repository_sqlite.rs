use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::feed::{model::NewUpload, repository::FeedRepository, schema::FeedEntity},
    utils::SQLITE_TIMEFMT,
};

#[derive(Clone)]
pub struct FeedSqliteRepository {
    pool: sqlx::SqlitePool,
}

impl FeedSqliteRepository {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FeedRepository for FeedSqliteRepository {
    async fn insert(&self, upload: &NewUpload) -> Result<FeedEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, FeedEntity>(
            r#"
            INSERT INTO feed (filepath, channels, datetime)
            VALUES (?, ?, datetime('now'))
            RETURNING id, filepath, channels, datetime
            "#,
        )
        .bind(&upload.filepath)
        .bind(&upload.channels)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn list_since(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<FeedEntity>, error::SystemError> {
        // The stored text format compares lexicographically in time order.
        let cutoff = cutoff.format(SQLITE_TIMEFMT).to_string();

        let rows = sqlx::query_as::<_, FeedEntity>(
            r#"
            SELECT id, filepath, channels, datetime
            FROM feed
            WHERE datetime > ?
            ORDER BY datetime DESC
            LIMIT ?
            "#,
        )
        .bind(&cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
