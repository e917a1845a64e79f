//! Adapter implementations for IAM callback ports.

pub mod http;
pub mod memory;
