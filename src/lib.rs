use crate::config::db::DB;
use crate::config::AppConfig;
use crate::service::tag_store::TagStore;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub mod command;
pub mod config;
pub mod errors;
pub mod model;
pub mod service;
pub mod util;

#[cfg(test)]
mod tests;

// Module state shared with the host framework.
// Cloning ModuleState is cheap because it uses Arc internally to share the
// database pool and the store.
#[derive(Clone)]
pub struct ModuleState {
    pub config: Arc<AppConfig>,
    pub db: Arc<DB>,
    pub store: Arc<TagStore>,
}

impl ModuleState {
    /// Acquires the store for the lifetime of the module: opens (creating if
    /// absent) the database file and ensures the tags table exists.
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let db = Arc::new(DB::new(&config.db.path, config.db.pool_size).await?);

        debug!("Ensuring tag schema at {}...", config.db.path);
        db.ensure_schema().await?;

        let store = Arc::new(TagStore::new(db.pool.clone(), config.search.limit));

        Ok(ModuleState {
            config: Arc::new(config),
            db,
            store,
        })
    }
}

/// Opt-in tracing setup for hosts that do not install their own subscriber.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer())
        .init();
}
