//! # Blog Core
//!
//! The domain layer of the blog API: entity schemas for blogs and comments,
//! their validation rules, and the repository ports the infrastructure
//! layer implements. No I/O happens in this crate.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
