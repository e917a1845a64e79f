//! Permission-guarded Composer package operations for Tollgate.
//!
//! Serves PHP Composer clients from artifact repositories: dist downloads,
//! per-package metadata, the repository index and uploads. Every operation
//! is checked against the caller's repository permission before it is
//! routed to the implementation registered for the repository category.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
