//! Server module for building the catalog HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Product listing and CRUD routes under the configured base path
//! - Health check routes

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
