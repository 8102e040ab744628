//! # Blog Shared
//!
//! Wire types for the blog API: request bodies, query strings, and the
//! `{message}` error body.

pub mod dto;
pub mod response;

pub use response::MessageResponse;
