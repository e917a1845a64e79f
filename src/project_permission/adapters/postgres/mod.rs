//! `PostgreSQL` adapters for the platform project table.

mod models;
mod schema;
mod store;

pub use store::{PostgresProjectStore, ProjectPgPool};
