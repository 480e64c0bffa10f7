use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::api::error;
use crate::modules::feed::{
    model::{self, NewUpload, UploadConfig},
    repository::FeedRepository,
    schema::{FeedEntity, FeedItem},
};
use crate::utils::SQLITE_TIMEFMT;

/// Fixed feed page size; there is no cursor or offset pagination.
const FEED_PAGE_SIZE: i64 = 10;

#[derive(Clone)]
pub struct FeedService<R>
where
    R: FeedRepository + Send + Sync,
{
    feed_repo: Arc<R>,
    config: UploadConfig,
}

impl<R> FeedService<R>
where
    R: FeedRepository + Send + Sync,
{
    pub fn new(feed_repo: Arc<R>, config: UploadConfig) -> Self {
        Self { feed_repo, config }
    }

    pub fn with_defaults(feed_repo: Arc<R>) -> Self {
        Self::new(feed_repo, UploadConfig::default())
    }

    /// Records strictly newer than `cutoff`, newest first, capped at the
    /// page size.
    pub async fn feed_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<FeedItem>, error::SystemError> {
        let rows = self.feed_repo.list_since(cutoff, FEED_PAGE_SIZE).await?;
        rows.into_iter().map(Self::to_item).collect()
    }

    fn to_item(entity: FeedEntity) -> Result<FeedItem, error::SystemError> {
        let datetime = NaiveDateTime::parse_from_str(&entity.datetime, SQLITE_TIMEFMT)
            .map_err(|_| {
                error::SystemError::corrupt_row(format!(
                    "unparseable datetime `{}` in feed row {}",
                    entity.datetime, entity.id
                ))
            })?
            .and_utc();

        Ok(FeedItem {
            id: entity.id,
            channels: model::decode_channels(&entity.channels),
            url: format!("/{}", entity.filepath),
            datetime,
        })
    }

    /// Write the file, then record it. A failed write leaves no row; a
    /// failed insert after a successful write leaves the file behind
    /// (logged, never cleaned up).
    pub async fn create_upload(
        &self,
        original_filename: &str,
        bytes: Vec<u8>,
        channels: Option<String>,
    ) -> Result<FeedItem, error::SystemError> {
        if bytes.len() > self.config.max_file_size {
            return Err(error::SystemError::bad_request(format!(
                "File size exceeds maximum allowed size of {} bytes",
                self.config.max_file_size
            )));
        }

        // Keep only the final path component; browsers may send full paths.
        let original = Path::new(original_filename)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| error::SystemError::bad_request("Invalid file name"))?;

        let channels = model::encode_channels(channels.as_deref().unwrap_or(""));
        let filename = model::timestamped_filename(Utc::now().timestamp(), original);

        tokio::fs::create_dir_all(&self.config.upload_dir).await?;
        let filepath = format!("{}/{}", self.config.upload_dir, filename);
        tokio::fs::write(&filepath, &bytes).await?;

        let upload = NewUpload { filepath: filepath.clone(), channels };
        let entity = self.feed_repo.insert(&upload).await.inspect_err(|err| {
            log::error!("feed row insert failed after writing {}: {}", filepath, err);
        })?;

        Self::to_item(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::feed::repository_sqlite::FeedSqliteRepository;
    use crate::test::memory_pool;

    async fn service_with_dir(
        max_file_size: usize,
    ) -> (FeedService<FeedSqliteRepository>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repo = FeedSqliteRepository::new(memory_pool().await);
        let config = UploadConfig {
            max_file_size,
            upload_dir: dir.path().to_str().unwrap().to_string(),
        };
        (FeedService::new(Arc::new(repo), config), dir)
    }

    fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(0, 0).unwrap()
    }

    #[tokio::test]
    async fn upload_writes_the_file_and_records_it() {
        let (service, dir) = service_with_dir(1024).await;

        let item = service
            .create_upload("cat.png", b"not actually a png".to_vec(), Some("cats, pics".into()))
            .await
            .unwrap();

        assert_eq!(item.channels, vec!["cats", "pics"]);

        let stored: Vec<_> = std::fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(stored.len(), 1);
        let name = stored[0].file_name().into_string().unwrap();
        assert!(name.ends_with("-cat.png"));
        assert_eq!(std::fs::read(stored[0].path()).unwrap(), b"not actually a png");
    }

    #[tokio::test]
    async fn missing_or_blank_channels_fall_back_to_default() {
        let (service, _dir) = service_with_dir(1024).await;

        let item = service.create_upload("a.txt", b"a".to_vec(), None).await.unwrap();
        assert_eq!(item.channels, vec!["default"]);

        let item = service.create_upload("b.txt", b"b".to_vec(), Some("  ".into())).await.unwrap();
        assert_eq!(item.channels, vec!["default"]);
    }

    #[tokio::test]
    async fn uploaded_channels_round_trip_through_the_feed() {
        let (service, _dir) = service_with_dir(1024).await;

        service.create_upload("cat.png", b"x".to_vec(), Some("a, b".into())).await.unwrap();

        let items = service.feed_since(epoch()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].channels, vec!["a", "b"]);
        assert!(items[0].url.ends_with("-cat.png"));
    }

    #[tokio::test]
    async fn oversized_uploads_are_rejected_before_writing() {
        let (service, dir) = service_with_dir(4).await;

        let result = service.create_upload("big.bin", vec![0u8; 5], None).await;
        assert!(matches!(result, Err(error::SystemError::BadRequest(_))));

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(service.feed_since(epoch()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn feed_items_expose_url_and_parsed_datetime() {
        let repo = Arc::new(FeedSqliteRepository::new(memory_pool().await));
        let service = FeedService::with_defaults(repo.clone());

        repo.insert(&NewUpload {
            filepath: "uploads/1700000000-cat.png".to_string(),
            channels: "default".to_string(),
        })
        .await
        .unwrap();

        let items = service.feed_since(epoch()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "/uploads/1700000000-cat.png");
        assert!(items[0].datetime.timestamp() > 0);
    }
}
