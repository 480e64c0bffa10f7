use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::{api::error, ENV};

/// The single process-wide connection pool. WAL with a 1s busy timeout so
/// concurrent request handlers queue on the writer instead of failing.
pub async fn connect_database() -> Result<SqlitePool, error::SystemError> {
    let options = SqliteConnectOptions::from_str(&ENV.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(1000))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().max_connections(5).connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
