//! Cross-cutting plumbing shared by Campus services: config loading, tracing,
//! request ids, health probes and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
