//! In-memory repositories - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Blog, BlogOrder, BlogQuery, Comment, Entity};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogRepository, CommentRepository};

/// In-memory collection kept in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryRepository<T> {
    store: RwLock<Vec<T>>,
}

/// In-memory blog repository.
pub type InMemoryBlogRepository = InMemoryRepository<Blog>;

/// In-memory comment repository.
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|e| e.id() == entity.id()) {
            return Err(RepoError::Constraint(format!(
                "{} {} already exists",
                T::NAME,
                entity.id()
            )));
        }
        store.push(entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|e| e.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let mut store = self.store.write().await;
        let removed = store
            .iter()
            .position(|e| e.id() == id)
            .map(|index| store.remove(index));
        Ok(removed)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_many(&self, query: BlogQuery) -> Result<Vec<Blog>, RepoError> {
        let store = self.store.read().await;

        // Stable sort keeps insertion order between equal timestamps.
        let mut blogs = store.clone();
        blogs.sort_by_key(|b| b.created_at);
        if query.order == BlogOrder::Newest {
            blogs.reverse();
        }
        if let Some(limit) = query.limit {
            blogs.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(blogs)
    }
}

impl CommentRepository for InMemoryCommentRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::{NewBlog, NewComment};

    fn blog(title: &str) -> Blog {
        Blog::new(NewBlog {
            title: title.to_string(),
            content: "Content".to_string(),
            author: "kim".to_string(),
        })
        .unwrap()
    }

    fn titles(blogs: &[Blog]) -> Vec<&str> {
        blogs.iter().map(|b| b.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryBlogRepository::new();
        let created = repo.create(blog("First")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repo = InMemoryBlogRepository::new();
        let first = repo.create(blog("First")).await.unwrap();
        let result = repo.create(first).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_find_many_orders_and_limits() {
        let repo = InMemoryBlogRepository::new();
        for title in ["one", "two", "three"] {
            repo.create(blog(title)).await.unwrap();
        }

        let newest = repo.find_many(BlogQuery::default()).await.unwrap();
        assert_eq!(titles(&newest), ["three", "two", "one"]);

        let oldest = repo
            .find_many(BlogQuery {
                order: BlogOrder::Oldest,
                limit: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(titles(&oldest), ["one", "two"]);
    }

    #[tokio::test]
    async fn test_save_missing_entity_fails() {
        let repo = InMemoryBlogRepository::new();
        let result = repo.save(blog("Ghost")).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_by_id_and_delete() {
        let repo = InMemoryCommentRepository::new();
        let comment = Comment::new(NewComment {
            content: "Nice".to_string(),
            author: "lee".to_string(),
            blog_id: Uuid::new_v4().to_string(),
            ..Default::default()
        })
        .unwrap();
        let id = repo.create(comment).await.unwrap().id;

        assert!(repo.find_by_id_and_delete(id).await.unwrap().is_some());
        assert!(repo.find_by_id_and_delete(id).await.unwrap().is_none());
    }
}
