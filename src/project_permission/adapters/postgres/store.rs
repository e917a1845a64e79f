//! `PostgreSQL` project store.
//!
//! Besides [`ProjectStore`], the store answers the callback
//! [`ProjectDirectory`] port so deployments co-located with the project
//! database can skip the project service.

use super::{models::ProjectRow, schema::t_project};
use crate::iam_callback::{
    domain::records::{ProjectSummary, RecordPage},
    ports::{DirectoryError, DirectoryResult, ProjectDirectory},
};
use crate::project_permission::ports::{ProjectStore, ProjectStoreError, ProjectStoreResult};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the project store.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project store.
#[derive(Debug, Clone)]
pub struct PostgresProjectStore {
    pool: ProjectPgPool,
}

impl PostgresProjectStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool of at most `pool_size` connections to `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectStoreError::Persistence`] when the pool cannot
    /// establish its initial connections.
    pub fn connect(database_url: &str, pool_size: u32) -> ProjectStoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(pool_size)
            .build(manager)
            .map_err(ProjectStoreError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectStoreError::persistence)?
    }
}

#[async_trait]
impl ProjectStore for PostgresProjectStore {
    async fn list_english_names(&self) -> ProjectStoreResult<Vec<String>> {
        self.run_blocking(|connection| {
            t_project::table
                .select(t_project::english_name)
                .order(t_project::id.asc())
                .load::<String>(connection)
                .map_err(ProjectStoreError::persistence)
        })
        .await
    }
}

#[async_trait]
impl ProjectDirectory for PostgresProjectStore {
    async fn list_projects(
        &self,
        offset: u64,
        limit: u64,
    ) -> DirectoryResult<Option<RecordPage<ProjectSummary>>> {
        let sql_offset = to_sql_bound(offset);
        let sql_limit = to_sql_bound(limit);
        let (total, rows) = self
            .run_blocking(move |connection| {
                let count = t_project::table
                    .filter(t_project::is_offlined.eq(false))
                    .count()
                    .get_result::<i64>(connection)
                    .map_err(ProjectStoreError::persistence)?;
                let rows = t_project::table
                    .filter(t_project::is_offlined.eq(false))
                    .order(t_project::id.asc())
                    .offset(sql_offset)
                    .limit(sql_limit)
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(connection)
                    .map_err(ProjectStoreError::persistence)?;
                Ok((count, rows))
            })
            .await
            .map_err(directory_error)?;
        Ok(Some(RecordPage::new(
            u64::try_from(total).unwrap_or_default(),
            rows.into_iter().map(row_to_summary).collect(),
        )))
    }

    async fn find_by_ids(&self, ids: &[String]) -> DirectoryResult<Option<Vec<ProjectSummary>>> {
        let codes = ids.to_vec();
        let rows = self
            .run_blocking(move |connection| {
                t_project::table
                    .filter(t_project::english_name.eq_any(codes))
                    .order(t_project::id.asc())
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(connection)
                    .map_err(ProjectStoreError::persistence)
            })
            .await
            .map_err(directory_error)?;
        Ok(Some(rows.into_iter().map(row_to_summary).collect()))
    }
}

fn row_to_summary(row: ProjectRow) -> ProjectSummary {
    let ProjectRow {
        english_name,
        project_name,
    } = row;
    ProjectSummary {
        english_name,
        project_name,
    }
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn directory_error(err: ProjectStoreError) -> DirectoryError {
    DirectoryError::transport(err)
}
