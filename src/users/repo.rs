use std::str::FromStr;

use axum::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{debug, info, instrument};

use crate::users::{error::StoreError, repo_types::User};

/// Read-only access to stored users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_all_users(&self) -> Result<Vec<User>, StoreError>;
}

#[derive(Clone)]
pub struct SqlUserStore {
    db: SqlitePool,
}

impl SqlUserStore {
    /// Opens the database file behind `database_url` and probes it.
    /// The file is never created; a missing database is a startup error.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(StoreError::Connectivity)?
            .create_if_missing(false);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .map_err(StoreError::Connectivity)?;
        Self::new(db).await
    }

    /// Wraps an existing pool after checking that it can reach the database.
    pub async fn new(db: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query("SELECT 1")
            .execute(&db)
            .await
            .map_err(StoreError::Connectivity)?;
        info!("connected to database");
        Ok(Self { db })
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.db
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    #[instrument(skip(self))]
    async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM user")
            .fetch_all(&self.db)
            .await
            .map_err(StoreError::from_read)?;
        debug!(count = users.len(), "users loaded");
        Ok(users)
    }
}
