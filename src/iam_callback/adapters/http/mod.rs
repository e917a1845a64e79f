//! HTTP adapters reaching the platform services over their service APIs.

mod client;
mod envelope;

pub use client::{HttpServiceClient, ServiceEndpoints};
pub use envelope::ServiceEnvelope;
