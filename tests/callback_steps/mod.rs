//! Step definitions for IAM callback behaviour tests.

pub mod given;
pub mod world;
