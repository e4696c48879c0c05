//! Startup schema synchronization.

use sqlx::PgPool;

use super::registry::Registry;
use crate::Result;

/// Validate the registry and create every missing table.
///
/// All DDL runs in one transaction: either every table exists afterwards or
/// nothing was committed.
pub async fn bootstrap(registry: &Registry, pool: &PgPool) -> Result<()> {
    registry.validate()?;

    let mut tx = pool.begin().await?;
    for table in registry.tables() {
        tracing::info!(table = %table.table_name, "Adding table");
        sqlx::query(&table.create_table_sql())
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!(tables = registry.tables().len(), "Schema bootstrap complete");
    Ok(())
}
