//! IAM callback resolution for Tollgate.
//!
//! The external authorization system enumerates and inspects platform
//! resources through callbacks. This module answers those callbacks by
//! querying the owning platform services (pipelines, code repositories,
//! environments, nodes, credentials, certificates and projects) and
//! reshaping their records into the uniform instance envelopes the IAM
//! system expects. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
