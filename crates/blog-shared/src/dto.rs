//! Data Transfer Objects - request types for the API.
//!
//! Fields are loosely typed JSON so presence and string casting are
//! decided by the handlers rather than rejected by deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to create a blog. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
}

/// Request to update a blog.
///
/// `author` is only read so the handler can refuse it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
}

/// Query string for listing blogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListBlogsQuery {
    /// `oldest` for ascending creation time; anything else is newest first.
    pub sort: Option<String>,
    /// Maximum number of blogs; `0` or unparseable means unlimited.
    pub count: Option<String>,
}

impl ListBlogsQuery {
    /// Build from raw query pairs. A key given more than once is treated
    /// as absent, and unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let single = |key: &str| {
            let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
            match (values.next(), values.next()) {
                (Some(value), None) => Some(value.clone()),
                _ => None,
            }
        };

        Self {
            sort: single("sort"),
            count: single("count"),
        }
    }
}

/// Request to create a comment. Unknown keys are collected in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: Option<Value>,
    pub author: Option<Value>,
    pub blog_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JavaScript-style truthiness for loosely typed request fields.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_create_comment_collects_extra_keys() {
        let req: CreateCommentRequest = serde_json::from_value(json!({
            "content": "Nice",
            "author": "lee",
            "blogId": "abc",
            "mood": "happy"
        }))
        .unwrap();

        assert_eq!(req.blog_id, Some(json!("abc")));
        assert_eq!(req.extra.len(), 1);
        assert_eq!(req.extra["mood"], json!("happy"));
    }

    #[test]
    fn test_create_blog_ignores_unknown_keys() {
        let req: CreateBlogRequest =
            serde_json::from_value(json!({"title": 12345, "views": 10})).unwrap();
        assert_eq!(req.title, Some(json!(12345)));
        assert!(req.author.is_none());
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_query_from_pairs() {
        let query = ListBlogsQuery::from_pairs(&pairs(&[("sort", "oldest"), ("count", "2")]));
        assert_eq!(query.sort.as_deref(), Some("oldest"));
        assert_eq!(query.count.as_deref(), Some("2"));
    }

    #[test]
    fn test_list_query_repeated_key_is_absent() {
        let query = ListBlogsQuery::from_pairs(&pairs(&[
            ("sort", "oldest"),
            ("sort", "newest"),
            ("count", "1"),
        ]));
        assert!(query.sort.is_none());
        assert_eq!(query.count.as_deref(), Some("1"));
    }
}
