//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, Order, QueryOrder, QuerySelect};

use blog_core::domain::{Blog, BlogOrder, BlogQuery};
use blog_core::error::RepoError;
use blog_core::ports::{BlogRepository, CommentRepository};

use super::entity::blog::{self, Entity as BlogEntity};
use super::entity::comment::Entity as CommentEntity;
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL blog repository.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_many(&self, query: BlogQuery) -> Result<Vec<Blog>, RepoError> {
        let order = match query.order {
            BlogOrder::Oldest => Order::Asc,
            BlogOrder::Newest => Order::Desc,
        };
        tracing::debug!(?order, limit = ?query.limit, "Listing blogs");

        let result = BlogEntity::find()
            .order_by(blog::Column::CreatedAt, order)
            .limit(query.limit)
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

impl CommentRepository for PostgresCommentRepository {}
