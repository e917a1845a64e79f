//! Template database, seeding and store fixtures for the `PostgreSQL` tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use rstest::fixture;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Runtime;
use tollgate::project_permission::adapters::postgres::PostgresProjectStore;

/// SQL creating the project table.
pub const CREATE_PROJECT_TABLE_SQL: &str =
    include_str!("../../migrations/2026-10-18-000000_create_t_project/up.sql");

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "tollgate_test_template";

static DATABASE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Builds the runtime the async store calls are driven on.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.batch_execute(CREATE_PROJECT_TABLE_SQL)?;
    Ok(())
}

fn unique_database_name() -> String {
    let sequence = DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("tollgate_test_{}_{sequence}", std::process::id())
}

/// Database cloned from the template, dropped again when the guard goes.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Clones [`TEMPLATE_DB`] into a freshly named database.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the clone cannot be created.
    pub fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        cluster.ensure_template_exists(TEMPLATE_DB, apply_migrations)?;
        let name = unique_database_name();
        cluster.create_database_from_template(&name, TEMPLATE_DB)?;
        Ok(Self { cluster, name })
    }

    /// Connection URL of the temporary database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(&self.name) {
            tracing::warn!(database = %self.name, %err, "failed to drop test database");
        }
    }
}

/// Inserts `(english_name, project_name, is_offlined)` rows in order.
///
/// # Errors
///
/// Returns an error if the connection or any insert fails.
pub fn seed_projects(url: &str, projects: &[(&str, &str, bool)]) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    for &(english_name, project_name, offlined) in projects {
        diesel::sql_query(
            "INSERT INTO t_project (english_name, project_name, is_offlined) VALUES ($1, $2, $3)",
        )
        .bind::<Text, _>(english_name)
        .bind::<Text, _>(project_name)
        .bind::<Bool, _>(offlined)
        .execute(&mut conn)?;
    }
    Ok(())
}

/// Projects seeded by [`store_context`]; `legacy` is offlined.
pub const SEEDED_PROJECTS: [(&str, &str, bool); 4] = [
    ("devops", "DevOps", false),
    ("legacy", "Legacy", true),
    ("mobile", "Mobile", false),
    ("web", "Web", false),
];

/// Store over a seeded temporary database.
pub struct StoreContext {
    /// Store under test.
    pub store: PostgresProjectStore,
    /// Keeps the database alive for the store's lifetime.
    pub database: TemporaryDatabase,
    /// Runtime used to drive the store's async methods.
    pub runtime: Runtime,
}

/// Seeds [`SEEDED_PROJECTS`] into a fresh database and connects a store.
///
/// Yields `None` when no cluster is available.
///
/// # Errors
///
/// Returns an error if the cluster is required but absent, or if database
/// setup fails.
#[fixture]
pub fn store_context(
    postgres_cluster: Result<Option<PostgresCluster>, BoxError>,
) -> Result<Option<StoreContext>, BoxError> {
    let Some(cluster) = postgres_cluster? else {
        return Ok(None);
    };
    let database = TemporaryDatabase::create(cluster)?;
    seed_projects(&database.url(), &SEEDED_PROJECTS)?;
    let store = PostgresProjectStore::connect(&database.url(), 2)?;
    Ok(Some(StoreContext {
        store,
        database,
        runtime: test_runtime()?,
    }))
}
