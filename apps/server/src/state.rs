//! Shared application state

use crate::{
    config::Config,
    db::{self, PatientStore, PostgresPatientStore},
    models,
    schema::{self, Registry},
    services::PatientService,
};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub patient_service: Arc<PatientService>,
}

impl AppState {
    /// Build the registry, connect to the database and bootstrap the schema.
    ///
    /// Any registration conflict or DDL failure aborts startup.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let mut registry = Registry::new();
        models::register_all(&mut registry);

        let pool = db::connect(&config.database)
            .await
            .context("Failed to connect to database")?;

        if config.database.bootstrap {
            schema::bootstrap(&registry, &pool)
                .await
                .context("Failed to bootstrap database schema")?;
        } else {
            registry
                .validate()
                .context("Invalid schema registration")?;
        }

        let store: Arc<dyn PatientStore> = Arc::new(PostgresPatientStore::new(pool));
        Ok(Self::from_parts(config, Arc::new(registry), store))
    }

    /// Assemble state around an already-validated registry and a store.
    pub fn from_parts(config: Config, registry: Arc<Registry>, store: Arc<dyn PatientStore>) -> Self {
        let patient_service = Arc::new(PatientService::new(
            store,
            registry,
            config.search.result_limit,
        ));
        Self {
            config: Arc::new(config),
            patient_service,
        }
    }
}
