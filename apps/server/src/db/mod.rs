/// Storage layer for the store API
///
/// This module provides the pooled LibSQL connection handling, the schema
/// migrations, and the repository interface the route handlers call.
pub mod migrations;
pub mod models;
pub mod pool;
pub mod repository;

pub use repository::{Database, DatabaseImpl};
