//! Adapters - Port implementations.
//!
//! In-memory adapters back single-process deployments and integration
//! tests. External-service adapters (database, provider HTTP client)
//! live with their consumers.

pub mod memory;
