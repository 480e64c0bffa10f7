use chrono::{DateTime, Utc};

use crate::{
    api::error,
    modules::feed::{model::NewUpload, schema::FeedEntity},
};

#[async_trait::async_trait]
pub trait FeedRepository {
    async fn insert(&self, upload: &NewUpload) -> Result<FeedEntity, error::SystemError>;

    async fn list_since(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<FeedEntity>, error::SystemError>;
}
