pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseConnection, DbErr};

mod m20260815_000001_create_scores; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260815_000001_create_scores::Migration)]
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

/// Run one migration command against an already-connected database.
/// Used by both the CLI and tests.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = Migrator::get_applied_migrations(db).await.map(|m| m.len());
    tracing::info!("cmd={command:?} applied_before={before:?}");

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if !matches!(command, MigrationCommand::Status) {
                let after = Migrator::get_applied_migrations(db).await.map(|m| m.len());
                tracing::info!("cmd={command:?} applied_after={after:?}");
            }
            tracing::info!("{command:?} OK");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{command:?} failed: {e}");
            Err(e)
        }
    }
}

/// Name of the most recently applied migration, if any. Surfaced by the
/// backend's health endpoint.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    let applied = Migrator::get_applied_migrations(db).await?;
    Ok(applied.last().map(|m| m.name().to_string()))
}
