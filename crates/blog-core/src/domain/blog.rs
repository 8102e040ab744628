use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Entity;
use super::schema::SchemaCheck;
use crate::error::DomainError;

/// Longest title a blog post may carry, in characters.
pub const TITLE_MAX_LENGTH: usize = 15;

/// Blog entity - a single post.
///
/// `author` is fixed at creation; nothing in this type changes it after
/// [`Blog::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a blog.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update of a blog. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Blog {
    /// Create a new blog with generated ID and timestamps.
    pub fn new(new: NewBlog) -> Result<Self, DomainError> {
        let now = Utc::now();
        let blog = Self {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            created_at: now,
            updated_at: now,
        };
        blog.validate()?;
        Ok(blog)
    }

    /// Check the blog against its schema.
    pub fn validate(&self) -> Result<(), DomainError> {
        SchemaCheck::new("Blog")
            .required("title", &self.title)
            .max_length("title", &self.title, TITLE_MAX_LENGTH)
            .required("content", &self.content)
            .required("author", &self.author)
            .finish()
    }

    /// Apply a patch and refresh `updated_at`.
    ///
    /// The blog is left untouched when the patched result fails validation.
    pub fn apply(&mut self, patch: BlogPatch) -> Result<(), DomainError> {
        let mut next = self.clone();
        if let Some(title) = patch.title {
            next.title = title;
        }
        if let Some(content) = patch.content {
            next.content = content;
        }
        next.validate()?;
        next.updated_at = Utc::now();
        *self = next;
        Ok(())
    }
}

impl Entity for Blog {
    const NAME: &'static str = "Blog";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Sort direction on `createdAt` for blog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogOrder {
    Oldest,
    #[default]
    Newest,
}

/// Listing parameters for blogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlogQuery {
    pub order: BlogOrder,
    /// Maximum number of blogs to return; `None` means unlimited.
    pub limit: Option<u64>,
}

impl BlogQuery {
    /// Build a query from raw `sort` and `count` parameters.
    ///
    /// Only `sort=oldest` selects ascending order. `count` is read as a
    /// number: fractions truncate, negatives use their magnitude, and zero
    /// or anything non-numeric means no limit.
    pub fn from_params(sort: Option<&str>, count: Option<&str>) -> Self {
        let order = match sort {
            Some("oldest") => BlogOrder::Oldest,
            _ => BlogOrder::Newest,
        };
        let limit = count
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .map(|n| n.trunc().abs() as u64)
            .filter(|&n| n > 0);

        Self { order, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_blog(title: &str) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            content: "Content".to_string(),
            author: "kim".to_string(),
        }
    }

    #[test]
    fn test_new_blog_sets_timestamps() {
        let blog = Blog::new(new_blog("Hello")).unwrap();
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.created_at, blog.updated_at);
    }

    #[test]
    fn test_title_at_limit_is_accepted() {
        assert!(Blog::new(new_blog(&"a".repeat(15))).is_ok());
    }

    #[test]
    fn test_title_over_limit_is_rejected() {
        let err = Blog::new(new_blog(&"a".repeat(16))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("maximum allowed length (15)"));
    }

    #[test]
    fn test_title_limit_counts_utf16_units() {
        // Each emoji is a surrogate pair
        assert!(Blog::new(new_blog(&"😀".repeat(7))).is_ok());
        assert!(Blog::new(new_blog(&"😀".repeat(8))).is_err());
    }

    #[test]
    fn test_missing_author_is_rejected() {
        let mut new = new_blog("Hello");
        new.author = String::new();
        let err = Blog::new(new).unwrap_err();
        assert!(err.to_string().contains("Path `author` is required."));
    }

    #[test]
    fn test_apply_updates_only_given_fields() {
        let mut blog = Blog::new(new_blog("Hello")).unwrap();
        blog.apply(BlogPatch {
            title: Some("new".to_string()),
            content: None,
        })
        .unwrap();

        assert_eq!(blog.title, "new");
        assert_eq!(blog.content, "Content");
        assert_eq!(blog.author, "kim");
        assert!(blog.updated_at >= blog.created_at);
    }

    #[test]
    fn test_apply_rejects_long_title_and_keeps_original() {
        let mut blog = Blog::new(new_blog("Hello")).unwrap();
        let result = blog.apply(BlogPatch {
            title: Some("x".repeat(16)),
            content: None,
        });

        assert!(result.is_err());
        assert_eq!(blog.title, "Hello");
    }

    #[test]
    fn test_query_from_params() {
        let query = BlogQuery::from_params(Some("oldest"), Some("2"));
        assert_eq!(query.order, BlogOrder::Oldest);
        assert_eq!(query.limit, Some(2));

        let query = BlogQuery::from_params(None, None);
        assert_eq!(query, BlogQuery::default());

        let query = BlogQuery::from_params(Some("latest"), Some("abc"));
        assert_eq!(query.order, BlogOrder::Newest);
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_query_count_edge_cases() {
        assert_eq!(BlogQuery::from_params(None, Some("0")).limit, None);
        assert_eq!(BlogQuery::from_params(None, Some("2.7")).limit, Some(2));
        assert_eq!(BlogQuery::from_params(None, Some("-3")).limit, Some(3));
        assert_eq!(BlogQuery::from_params(None, Some("")).limit, None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let blog = Blog::new(new_blog("Hello")).unwrap();
        let json = serde_json::to_value(&blog).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
