pub mod fixtures;
pub mod postgres;

use anyhow::Context as _;
use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use freemed::{
    api::create_router,
    config::{Config, DatabaseConfig, LoggingConfig, SearchConfig, ServerConfig},
    db::{search::BindValue, PatientSearchQuery, PatientStore},
    models::{self, EmrAttachment, PatientInformation, PatientSearchResult},
    schema::Registry,
    AppState,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt as _;

pub use fixtures::*;

/// In-memory store. Searches return every fixture patient (the SQL itself is
/// not evaluated) and record the generated query for inspection.
#[derive(Default)]
pub struct InMemoryStore {
    pub patients: Vec<PatientSearchResult>,
    pub information: Vec<(i64, PatientInformation)>,
    pub attachments: Vec<EmrAttachment>,
    pub executed: Mutex<Vec<(String, Vec<BindValue>)>>,
}

#[async_trait]
impl PatientStore for InMemoryStore {
    async fn search(&self, query: &PatientSearchQuery) -> freemed::Result<Vec<PatientSearchResult>> {
        self.executed.lock().unwrap().push(query.build_sql());
        Ok(self.patients.clone())
    }

    async fn information(&self, patient: i64) -> freemed::Result<Option<PatientInformation>> {
        Ok(self
            .information
            .iter()
            .find(|(id, _)| *id == patient)
            .map(|(_, info)| info.clone()))
    }

    async fn attachments(
        &self,
        patient: i64,
        module: Option<&str>,
    ) -> freemed::Result<Vec<EmrAttachment>> {
        Ok(self
            .attachments
            .iter()
            .filter(|a| a.patient == patient)
            .filter(|a| module.map_or(true, |m| a.module == m))
            .cloned()
            .collect())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origins: vec![],
            max_request_body_size: 64 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://localhost/freemed_test".into(),
            pool_min_size: 0,
            pool_max_size: 2,
            pool_timeout_seconds: 5,
            bootstrap: false,
            test_database_url: None,
        },
        logging: LoggingConfig {
            level: "debug".into(),
            json: false,
            file_enabled: false,
            file_directory: "logs".into(),
            file_prefix: "freemed-test".into(),
            file_rotation: "never".into(),
            service_name: "freemed-test".into(),
            deployment_environment: "test".into(),
        },
        search: SearchConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(seeded_store())
    }

    pub fn with_store(store: InMemoryStore) -> Self {
        let mut registry = Registry::new();
        models::register_all(&mut registry);
        registry.validate().expect("test registry is valid");

        let store = Arc::new(store);
        let state = AppState::from_parts(test_config(), Arc::new(registry), store.clone());
        Self {
            router: create_router(state),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        dispatch(&self.router, method, path, body).await
    }

    pub async fn json(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> anyhow::Result<(StatusCode, serde_json::Value)> {
        let (status, _headers, body) = self.request(method, path, body).await?;
        Ok((status, parse_json(&body)?))
    }

    pub fn executed(&self) -> Vec<(String, Vec<BindValue>)> {
        self.store.executed.lock().unwrap().clone()
    }
}

/// Send one request through `router` and collect the response.
pub async fn dispatch(
    router: &Router,
    method: Method,
    path: &str,
    body: Option<&str>,
) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(match body {
            Some(text) => Body::from(text.to_string()),
            None => Body::empty(),
        })
        .context("build request")?;

    let response = router
        .clone()
        .oneshot(request)
        .await
        .context("dispatch request")?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("read response body")?;

    Ok((status, headers, body))
}

pub fn parse_json(body: &[u8]) -> anyhow::Result<serde_json::Value> {
    serde_json::from_slice(body).context("parse response json")
}
