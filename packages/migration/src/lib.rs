pub use sea_orm_migration::prelude::*;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20260801_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260801_000001_init::Migration)]
    }
}

/// Bring a freshly-connected store up to the current schema.
/// Used by library consumers and the test bootstrap alike.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = format!("{:?}", db.get_database_backend());
    let defined = Migrator::migrations().len();
    let applied = count_applied_migrations(db).await.unwrap_or(0);
    tracing::info!(backend, defined, applied, "running migrations");

    Migrator::up(db, None).await?;

    tracing::info!(backend, "migrations up to date");
    Ok(())
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
