use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

const PRAGMAS: &[&str] = &["PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL", "PRAGMA foreign_keys=ON"];

pub async fn connect(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    if database_url.contains(":memory:") {
        // every pooled connection would otherwise open its own empty database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    for pragma in PRAGMAS {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Ok(db)
}

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let db = connect(database_url).await?;
    init_schema(&db, false).await?;
    Ok(db)
}

/// Creates any missing tables. With `drop`, every table is dropped and recreated first.
pub async fn init_schema(db: &DatabaseConnection, drop: bool) -> AppResult<()> {
    if drop {
        tracing::warn!("dropping all tables");
        Migrator::fresh(db).await?;
    } else {
        Migrator::up(db, None).await?;
    }
    Ok(())
}
