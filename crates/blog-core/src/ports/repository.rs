use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, BlogQuery, Comment};
use crate::error::RepoError;

/// Generic repository trait defining the persistence gateway for one collection.
///
/// Entities handed to `create` and `save` have already passed their schema
/// checks; implementations store them as given.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Overwrite an existing entity. Fails with [`RepoError::NotFound`] when
    /// nothing is stored under its id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Remove an entity by its ID, returning what was removed.
    async fn find_by_id_and_delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// List blogs ordered by creation time, optionally limited.
    async fn find_many(&self, query: BlogQuery) -> Result<Vec<Blog>, RepoError>;
}

/// Comment repository.
pub trait CommentRepository: BaseRepository<Comment, Uuid> {}
