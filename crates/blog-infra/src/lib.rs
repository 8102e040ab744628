//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryBlogRepository, InMemoryCommentRepository};

#[cfg(feature = "postgres")]
pub use database::{PostgresBlogRepository, PostgresCommentRepository};
