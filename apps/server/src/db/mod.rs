//! Database layer - connection pool, search builder and patient store

pub mod search;
pub mod store;
pub mod traits;

pub use search::{build_predicate, PatientSearchQuery, Predicate, SearchCriteria};
pub use store::PostgresPatientStore;
pub use traits::PatientStore;

use crate::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Open the shared connection pool.
pub async fn connect(config: &DatabaseConfig) -> crate::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.pool_min_size)
        .max_connections(config.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.pool_max_size,
        "Database pool established"
    );
    Ok(pool)
}
