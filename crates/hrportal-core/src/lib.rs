//! Cross-cutting plumbing shared by HR Portal services: configuration
//! loading, tracing setup, health probes and HTTP middleware.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
