//! Project permission checks for Tollgate.
//!
//! Wraps project creation, modification, deletion and per-user project
//! lookup in authorization checks against the IAM system. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
