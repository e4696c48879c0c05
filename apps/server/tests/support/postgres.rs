//! Postgres-backed test app. Each test runs in a fresh schema created on the
//! database named by `database.test_database_url`
//! (`FREEMED__DATABASE__TEST_DATABASE_URL`); the server bootstraps its tables
//! into that schema at startup.

use anyhow::Context as _;
use axum::{
    body::Bytes,
    http::{HeaderMap, Method, StatusCode},
    Router,
};
use freemed::{api::create_router, db, AppState, Config};
use futures::FutureExt as _;
use sqlx::{Connection as _, PgPool};
use std::sync::Arc;
use tokio::sync::OnceCell;
use url::Url;
use uuid::Uuid;

use super::{dispatch, parse_json};

static SHARED: OnceCell<Arc<Option<Config>>> = OnceCell::const_new();

/// Base configuration, or `None` when no test database is configured.
async fn base_config() -> anyhow::Result<Arc<Option<Config>>> {
    SHARED
        .get_or_try_init(|| async {
            let mut config = Config::load_from(None).context("load Config for tests")?;
            let Some(url) = config.database.test_database_url.clone() else {
                return Ok(Arc::new(None));
            };
            config.database.url = url;
            config.database.bootstrap = true;
            Ok(Arc::new(Some(config)))
        })
        .await
        .cloned()
}

pub struct PgTestApp {
    pub router: Router,
    pub pool: PgPool,
    schema: String,
    admin_database_url: String,
}

impl PgTestApp {
    pub async fn new() -> anyhow::Result<Option<Self>> {
        let shared = base_config().await?;
        let Some(mut config) = (*shared).clone() else {
            return Ok(None);
        };

        let admin_database_url = config.database.url.clone();
        let schema = format!("test_{}", Uuid::new_v4().simple());
        let mut admin_conn = sqlx::PgConnection::connect(&admin_database_url)
            .await
            .context("connect admin db for schema create")?;
        sqlx::query(&format!(r#"CREATE SCHEMA "{}""#, schema))
            .execute(&mut admin_conn)
            .await
            .context("create test schema")?;

        config.database.url = with_search_path(&admin_database_url, &schema)?;
        config.database.pool_min_size = 0;
        config.database.pool_max_size = 2;
        config.database.pool_timeout_seconds = 30;

        let state = AppState::new(config.clone())
            .await
            .context("initialize AppState")?;
        let pool = db::connect(&config.database)
            .await
            .context("connect seeding pool")?;

        Ok(Some(Self {
            router: create_router(state),
            pool,
            schema,
            admin_database_url,
        }))
    }

    pub async fn cleanup(self) -> anyhow::Result<()> {
        self.pool.close().await;
        drop(self.router);

        let mut admin_conn = sqlx::PgConnection::connect(&self.admin_database_url)
            .await
            .context("connect admin db for schema drop")?;
        sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, self.schema))
            .execute(&mut admin_conn)
            .await
            .context("drop test schema")?;

        Ok(())
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

    /// Insert a patient born `age` years (and a few days) ago.
    pub async fn insert_patient(
        &self,
        last_name: &str,
        first_name: &str,
        age: i32,
        archived: bool,
    ) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO patient (ptlname, ptfname, ptid, ptdob, ptarchive) \
             VALUES ($1, $2, $3, (CURRENT_DATE - make_interval(years => $4) - INTERVAL '10 days')::date, $5) \
             RETURNING id",
        )
        .bind(last_name)
        .bind(first_name)
        .bind(format!("{}-{}", first_name, age))
        .bind(age)
        .bind(archived)
        .fetch_one(&self.pool)
        .await
        .context("insert patient")?;
        Ok(id)
    }

    /// Insert a patient born `months` months (and a few days) ago.
    pub async fn insert_infant(&self, last_name: &str, months: i32) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO patient (ptlname, ptfname, ptid, ptdob, ptarchive) \
             VALUES ($1, 'Baby', 'INF1', (CURRENT_DATE - make_interval(months => $2) - INTERVAL '10 days')::date, FALSE) \
             RETURNING id",
        )
        .bind(last_name)
        .bind(months)
        .fetch_one(&self.pool)
        .await
        .context("insert infant")?;
        Ok(id)
    }

    pub async fn insert_address(
        &self,
        patient: i64,
        city: &str,
        postal: &str,
        active: bool,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO patient_address (patient, line1, city, stpr, postal, active) \
             VALUES ($1, '1 Main St', $2, 'IL', $3, $4)",
        )
        .bind(patient)
        .bind(city)
        .bind(postal)
        .bind(active)
        .execute(&self.pool)
        .await
        .context("insert address")?;
        Ok(())
    }

    pub async fn insert_allergy(&self, patient: i64, allergy: &str) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO allergies (patient, allergy, active) VALUES ($1, $2, 'active') RETURNING id",
        )
        .bind(patient)
        .bind(allergy)
        .fetch_one(&self.pool)
        .await
        .context("insert allergy")?;
        Ok(id)
    }

    pub async fn insert_module(&self, table: &str, name: &str, hidden: bool) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO modules (module_name, module_class, module_table, module_hidden) \
             VALUES ($1, $1, $2, $3)",
        )
        .bind(name)
        .bind(table)
        .bind(hidden)
        .execute(&self.pool)
        .await
        .context("insert module")?;
        Ok(())
    }

    pub async fn insert_attachment(
        &self,
        patient: i64,
        module: &str,
        oid: i64,
        summary: &str,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO patient_emr (patient, module, oid, summary, stamp, locked) \
             VALUES ($1, $2, $3, $4, now(), 0)",
        )
        .bind(patient)
        .bind(module)
        .bind(oid)
        .bind(summary)
        .execute(&self.pool)
        .await
        .context("insert attachment")?;
        Ok(())
    }
}

/// Run `f` against a fresh Postgres-backed app, dropping its schema afterwards.
///
/// Skips (and returns `Ok`) when no test database is configured.
pub async fn with_pg_app<F>(f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(
        &'a PgTestApp,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = anyhow::Result<()>> + 'a>,
    >,
{
    let Some(app) = PgTestApp::new().await? else {
        eprintln!("FREEMED__DATABASE__TEST_DATABASE_URL not set; skipping Postgres test");
        return Ok(());
    };

    let result = std::panic::AssertUnwindSafe(f(&app)).catch_unwind().await;
    let cleanup_result = app.cleanup().await;

    if let Err(e) = cleanup_result {
        eprintln!("test schema cleanup failed: {e:?}");
    }

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn with_search_path(database_url: &str, schema: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(database_url).context("parse database URL")?;
    url.query_pairs_mut()
        .append_pair("options", &format!("-c search_path={}", schema));
    Ok(url.to_string())
}
