//! Store connection helper.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Connect to the backing store.
///
/// Accepts any URL SeaORM understands (`postgres://...`,
/// `sqlite::memory:`, `sqlite://path`). SQL statement logging stays off;
/// services emit their own tracing events.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));

    // A pooled SQLite in-memory database is one database per connection;
    // pin the pool to a single connection so every caller sees the same
    // store.
    if url.starts_with("sqlite::memory:") {
        options.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(options).await?;
    info!(url, "connected to store");
    Ok(conn)
}
