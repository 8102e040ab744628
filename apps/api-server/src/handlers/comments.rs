//! Comment handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::{Map, Value};

use blog_core::domain::{Comment, NewComment, cast_field, parse_id};
use blog_shared::dto::{CreateCommentRequest, is_truthy};

use super::{parse_body, present};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /comments
///
/// The referenced blog is not required to exist.
pub async fn create_comment(
    state: web::Data<AppState>,
    http: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: CreateCommentRequest = parse_body(&http, &body)?;

    let (Some(content), Some(author), Some(blog_id)) =
        (present(req.content), present(req.author), present(req.blog_id))
    else {
        return Err(AppError::BadRequest(None));
    };

    let comment = Comment::new(NewComment {
        content: cast_field("Comment", "content", &content)?,
        author: cast_field("Comment", "author", &author)?,
        blog_id: cast_field("Comment", "blogId", &blog_id)?,
        extra: req.extra,
    })?;
    let comment = state.comments.create(comment).await?;

    tracing::info!(comment_id = %comment.id, blog_id = %comment.blog_id, "Comment created");
    Ok(HttpResponse::Created().json(comment))
}

/// GET /comments/{id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.comments.find_by_id(id).await? {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Err(AppError::NotFound(None)),
    }
}

/// PATCH /comments/{id} - merges every field except `blogId`.
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let fields: Map<String, Value> = parse_body(&http, &body)?;

    if fields.get("blogId").is_some_and(is_truthy) {
        return Err(AppError::BadRequest(None));
    }

    let id = parse_id(&path)?;
    let mut comment = state
        .comments
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(None))?;

    comment.merge(fields)?;
    let comment = state.comments.save(comment).await?;

    tracing::info!(comment_id = %comment.id, "Comment updated");
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.comments.find_by_id_and_delete(id).await? {
        Some(_) => {
            tracing::info!(comment_id = %id, "Comment deleted");
            Ok(HttpResponse::NoContent().finish())
        }
        None => Err(AppError::NotFound(None)),
    }
}
