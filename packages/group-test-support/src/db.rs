//! Migrated in-memory stores for tests.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Open a fresh SQLite in-memory database and bring it up to the current
/// schema.
///
/// The pool is pinned to a single connection: a pooled SQLite in-memory
/// database is otherwise one database per connection, and the tests would
/// see different stores on every call.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    migration::migrate_up(&db).await?;
    Ok(db)
}
