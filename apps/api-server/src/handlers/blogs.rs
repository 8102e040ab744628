//! Blog handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use blog_core::domain::{Blog, BlogPatch, BlogQuery, NewBlog, cast_field, parse_id};
use blog_shared::dto::{CreateBlogRequest, ListBlogsQuery, UpdateBlogRequest, is_truthy};

use super::{parse_body, present};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const AUTHOR_IMMUTABLE: &str = "author는 변경할 수 없습니다.";
const BLOG_NOT_FOUND: &str = "해당 ID가 존재하지 않습니다";

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    http: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: CreateBlogRequest = parse_body(&http, &body)?;

    let (Some(title), Some(content), Some(author)) =
        (present(req.title), present(req.content), present(req.author))
    else {
        return Err(AppError::BadRequest(None));
    };

    let blog = Blog::new(NewBlog {
        title: cast_field("Blog", "title", &title)?,
        content: cast_field("Blog", "content", &content)?,
        author: cast_field("Blog", "author", &author)?,
    })?;
    let blog = state.blogs.create(blog).await?;

    tracing::info!(blog_id = %blog.id, "Blog created");
    Ok(HttpResponse::Created().json(blog))
}

/// GET /blogs?sort=oldest&count=N
pub async fn list_blogs(
    state: web::Data<AppState>,
    pairs: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let params = ListBlogsQuery::from_pairs(&pairs);
    let query = BlogQuery::from_params(params.sort.as_deref(), params.count.as_deref());
    let blogs = state.blogs.find_many(query).await?;

    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.blogs.find_by_id(id).await? {
        Some(blog) => Ok(HttpResponse::Ok().json(blog)),
        None => Err(AppError::NotFound(None)),
    }
}

/// PATCH /blogs/{id} - only `title` and `content` may change.
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    http: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let req: UpdateBlogRequest = parse_body(&http, &body)?;

    // Refused before the id is even looked at.
    if req.author.as_ref().is_some_and(is_truthy) {
        return Err(AppError::BadRequest(Some(AUTHOR_IMMUTABLE.to_string())));
    }

    let id = parse_id(&path)?;
    let mut blog = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(None))?;

    let title = present(req.title)
        .map(|v| cast_field("Blog", "title", &v))
        .transpose()?;
    let content = present(req.content)
        .map(|v| cast_field("Blog", "content", &v))
        .transpose()?;
    blog.apply(BlogPatch { title, content })?;
    let blog = state.blogs.save(blog).await?;

    tracing::info!(blog_id = %blog.id, "Blog updated");
    Ok(HttpResponse::Ok().json(blog))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    match state.blogs.find_by_id_and_delete(id).await? {
        Some(_) => {
            tracing::info!(blog_id = %id, "Blog deleted");
            Ok(HttpResponse::NoContent().finish())
        }
        None => Err(AppError::NotFound(Some(BLOG_NOT_FOUND.to_string()))),
    }
}
