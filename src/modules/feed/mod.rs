pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_sqlite;
pub mod route;
pub mod schema;
pub mod service;

pub use handle::{get_feed, post_upload};
pub use model::{NewUpload, UploadConfig};
pub use repository::FeedRepository;
pub use repository_sqlite::FeedSqliteRepository;
pub use schema::{FeedEntity, FeedItem};
pub use service::FeedService;
