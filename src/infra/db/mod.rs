//! Database connection and schema management.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Handle over the connection pool, with the migration operations the
/// CLI exposes.
pub struct Database {
    connection: DatabaseConnection,
}

/// Clone a connection handle. `sea_orm::DatabaseConnection` only derives
/// `Clone` while the `mock` feature is off, and `test-utils` turns that
/// feature on; this reproduces the derive for the variants this crate
/// can encounter.
pub(crate) fn clone_connection(connection: &DatabaseConnection) -> DatabaseConnection {
    match connection {
        DatabaseConnection::SqlxPostgresPoolConnection(conn) => {
            DatabaseConnection::SqlxPostgresPoolConnection(conn.clone())
        }
        #[cfg(feature = "test-utils")]
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(conn.clone())
        }
        DatabaseConnection::Disconnected => DatabaseConnection::Disconnected,
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            connection: clone_connection(&self.connection),
        }
    }
}

impl Database {
    /// Connect and bring the schema up to date.
    ///
    /// # Panics
    /// Panics if the database is unreachable or a migration fails. The
    /// serve and fixtures commands cannot do anything useful without a
    /// migrated schema.
    pub async fn connect(config: &Config) -> Self {
        let db = Self::connect_without_migrations(config)
            .await
            .expect("Failed to connect to database");

        if let Err(e) = db.run_migrations().await {
            tracing::error!("Failed to run migrations: {}", e);
            panic!("Failed to run migrations: {}", e);
        }
        tracing::info!("Database connected and migrations applied");

        db
    }

    /// Connect without touching the schema, for commands that manage
    /// migrations themselves.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        clone_connection(&self.connection)
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration with its applied flag, in definition order.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        let migrations = Migrator::get_migration_with_status(&self.connection).await?;

        Ok(migrations
            .iter()
            .map(|m| {
                (
                    m.name().to_string(),
                    m.status() == MigrationStatus::Applied,
                )
            })
            .collect())
    }

    /// Drop everything and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}
