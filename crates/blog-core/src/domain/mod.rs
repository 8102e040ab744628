//! Domain entities - the core business objects.

mod blog;
mod comment;
mod id;
mod schema;

pub use blog::{Blog, BlogOrder, BlogPatch, BlogQuery, NewBlog, TITLE_MAX_LENGTH};
pub use comment::{Comment, NewComment};
pub use id::parse_id;
pub use schema::cast_field;

use uuid::Uuid;

/// Anything stored in a repository keyed by a generated id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Name used in error messages and logs.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
}
