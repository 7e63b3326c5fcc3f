//! Cross-cutting service plumbing: health endpoints, request-id layers,
//! tracing setup, and small sea-orm extensions.

pub mod health;
pub mod request_id;
pub mod sea_ext;
pub mod tracing;
