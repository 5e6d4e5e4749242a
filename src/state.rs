use crate::config::AppConfig;
use crate::users::repo::{SqlUserStore, UserStore};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Opens and probes the database. Fails before anything is served.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = SqlUserStore::connect(&config.database_url)
            .await
            .with_context(|| format!("open database {}", config.database_url))?;

        Ok(Self::from_parts(Arc::new(store), Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn UserStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::users::{error::StoreError, repo_types::User};
        use axum::async_trait;

        // Always fails, stands in for a broken database.
        struct FailingStore;
        #[async_trait]
        impl UserStore for FailingStore {
            async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
                Err(StoreError::Query(sqlx::Error::PoolClosed))
            }
        }

        Self::from_parts(Arc::new(FailingStore), Arc::new(Self::test_config()))
    }

    #[cfg(test)]
    pub fn test_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 0,
        }
    }
}
