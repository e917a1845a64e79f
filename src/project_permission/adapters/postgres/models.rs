//! Diesel row models for the platform project table.

use super::schema::t_project;
use diesel::prelude::*;

/// Project columns read by the callback and permission adapters.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = t_project)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project english name.
    pub english_name: String,
    /// Project display name.
    pub project_name: String,
}
