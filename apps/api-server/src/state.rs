//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{BlogRepository, CommentRepository};
use blog_infra::database::{DatabaseConfig, InMemoryBlogRepository, InMemoryCommentRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{PostgresBlogRepository, PostgresCommentRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match blog_infra::database::connect(config).await {
                Ok(conn) => {
                    let conn = Arc::new(conn);
                    Self {
                        blogs: Arc::new(PostgresBlogRepository::shared(Arc::clone(&conn))),
                        comments: Arc::new(PostgresCommentRepository::shared(conn)),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }
}
