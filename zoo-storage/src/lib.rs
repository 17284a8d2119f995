//! SQLite-backed storage layer: connection management, schema migration
//! and demo seeding.

mod migration;
mod sql;

pub use migration::Migrator;
pub use sea_orm_migration::MigratorTrait;

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use zoo_error::{init::InitContextError, storage::StorageError, ZooResult};
use zoo_models::settings::Settings;

/// Global database manager struct
pub struct ZooDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl ZooDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    pub async fn init(settings: &Settings) -> ZooResult<Arc<Self>, InitContextError> {
        std::fs::create_dir_all(&settings.general.data_dir).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create data directory: {e}"))
        })?;

        let db_conn = {
            let db = sql::sqlite::init_db(&settings.db.sqlite, &settings.general.data_dir)
                .await
                .map_err(|e| {
                    InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
                })?;

            // Run database migrations
            Migrator::up(&db, None).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
            })?;

            db
        };

        let db_manager = Arc::new(ZooDbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    pub fn get_connection(&self) -> ZooResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    pub async fn close(&self) -> ZooResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}
