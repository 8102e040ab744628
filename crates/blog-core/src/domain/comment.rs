use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Entity;
use super::schema::{SchemaCheck, cast_string};
use crate::error::DomainError;

/// Comment entity - a note attached to a blog by id.
///
/// `blog_id` is not checked against existing blogs. Keys outside the
/// known fields are kept in `extra` and flattened back into the JSON
/// object, so comments carry an open schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub author: String,
    pub blog_id: Uuid,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Fields accepted when creating a comment.
///
/// `blog_id` is raw input; a value that is not an id fails validation.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub content: String,
    pub author: String,
    pub blog_id: String,
    pub extra: Map<String, Value>,
}

const RESERVED_KEYS: [&str; 4] = ["id", "content", "author", "blogId"];

impl Comment {
    /// Create a new comment with a generated ID.
    pub fn new(new: NewComment) -> Result<Self, DomainError> {
        let mut check = SchemaCheck::new("Comment");
        check
            .required("content", &new.content)
            .required("author", &new.author)
            .required("blogId", &new.blog_id);

        let blog_id = match Uuid::parse_str(new.blog_id.trim()) {
            Ok(blog_id) => blog_id,
            Err(_) => {
                if !new.blog_id.is_empty() {
                    check.cast_failed("blogId", "ObjectId", &new.blog_id);
                }
                return Err(check.error());
            }
        };
        check.finish()?;

        let mut extra = new.extra;
        extra.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Ok(Self {
            id: Uuid::new_v4(),
            content: new.content,
            author: new.author,
            blog_id,
            extra,
        })
    }

    /// Check the comment against its schema.
    pub fn validate(&self) -> Result<(), DomainError> {
        SchemaCheck::new("Comment")
            .required("content", &self.content)
            .required("author", &self.author)
            .finish()
    }

    /// Merge arbitrary request fields onto the comment.
    ///
    /// `content` and `author` are coerced to strings; `blogId` and `id`
    /// are never touched; any other key is stored as an extra field. The
    /// comment is left untouched when the merged result fails validation.
    pub fn merge(&mut self, fields: Map<String, Value>) -> Result<(), DomainError> {
        let mut next = self.clone();
        let mut check = SchemaCheck::new("Comment");

        for (key, value) in fields {
            match key.as_str() {
                "id" | "blogId" => continue,
                "content" | "author" => match cast_string(&value) {
                    Some(text) if key == "content" => next.content = text,
                    Some(text) => next.author = text,
                    None => {
                        check.cast_failed(&key, "string", &value.to_string());
                    }
                },
                _ => {
                    next.extra.insert(key, value);
                }
            }
        }

        check.finish()?;
        next.validate()?;
        *self = next;
        Ok(())
    }
}

impl Entity for Comment {
    const NAME: &'static str = "Comment";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_comment(blog_id: &str) -> NewComment {
        NewComment {
            content: "Nice post".to_string(),
            author: "lee".to_string(),
            blog_id: blog_id.to_string(),
            extra: Map::new(),
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_new_comment() {
        let blog_id = Uuid::new_v4();
        let comment = Comment::new(new_comment(&blog_id.to_string())).unwrap();
        assert_eq!(comment.blog_id, blog_id);
        assert!(comment.extra.is_empty());
    }

    #[test]
    fn test_malformed_blog_id_is_validation_error() {
        let err = Comment::new(new_comment("abc")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("blogId"));
    }

    #[test]
    fn test_missing_blog_id_is_validation_error() {
        let err = Comment::new(new_comment("")).unwrap_err();
        assert!(err.to_string().contains("Path `blogId` is required."));
    }

    #[test]
    fn test_extra_fields_drop_reserved_keys() {
        let mut new = new_comment(&Uuid::new_v4().to_string());
        new.extra = fields(json!({"id": "forged", "mood": "happy"}));

        let comment = Comment::new(new).unwrap();
        assert_eq!(comment.extra.len(), 1);
        assert_eq!(comment.extra["mood"], json!("happy"));
    }

    #[test]
    fn test_merge_known_and_unknown_fields() {
        let blog_id = Uuid::new_v4();
        let mut comment = Comment::new(new_comment(&blog_id.to_string())).unwrap();
        let original_id = comment.id;

        comment
            .merge(fields(json!({
                "content": "Edited",
                "likes": 3,
                "blogId": "",
                "id": "forged"
            })))
            .unwrap();

        assert_eq!(comment.id, original_id);
        assert_eq!(comment.blog_id, blog_id);
        assert_eq!(comment.content, "Edited");
        assert_eq!(comment.author, "lee");
        assert_eq!(comment.extra["likes"], json!(3));
    }

    #[test]
    fn test_merge_rejects_empty_content() {
        let mut comment = Comment::new(new_comment(&Uuid::new_v4().to_string())).unwrap();
        let err = comment
            .merge(fields(json!({"content": null, "likes": 1})))
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(comment.content, "Nice post");
        assert!(comment.extra.is_empty());
    }

    #[test]
    fn test_merge_rejects_object_author() {
        let mut comment = Comment::new(new_comment(&Uuid::new_v4().to_string())).unwrap();
        let err = comment
            .merge(fields(json!({"author": {"name": "x"}})))
            .unwrap_err();
        assert!(err.to_string().contains("Cast to string failed"));
    }

    #[test]
    fn test_extra_fields_flatten_into_json() {
        let mut comment = Comment::new(new_comment(&Uuid::new_v4().to_string())).unwrap();
        comment.merge(fields(json!({"mood": "happy"}))).unwrap();

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["mood"], json!("happy"));
        assert!(json.get("blogId").is_some());
        assert!(json.get("extra").is_none());
    }
}
