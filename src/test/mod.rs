#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;

/// In-memory database with the real migrations applied. Capped to a single
/// connection since every `sqlite::memory:` connection is its own database.
pub async fn memory_pool() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    pool
}
