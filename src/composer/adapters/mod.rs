//! Adapter implementations for Composer ports.

pub mod fs;
pub mod local;
pub mod memory;
