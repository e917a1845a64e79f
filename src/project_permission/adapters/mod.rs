//! Adapter implementations for project permission ports.

pub mod memory;
pub mod postgres;
