//! HTTP handlers and route configuration.

mod blogs;
mod comments;
mod health;


use actix_web::{HttpMessage, HttpRequest, web};
use serde::de::DeserializeOwned;
use serde_json::Value;

use blog_shared::dto::is_truthy;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blogs")
                .service(
                    web::resource("")
                        .route(web::post().to(blogs::create_blog))
                        .route(web::get().to(blogs::list_blogs)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(blogs::get_blog))
                        .route(web::patch().to(blogs::update_blog))
                        .route(web::delete().to(blogs::delete_blog)),
                ),
        )
        .service(
            web::scope("/comments")
                .service(web::resource("").route(web::post().to(comments::create_comment)))
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(comments::get_comment))
                        .route(web::patch().to(comments::update_comment))
                        .route(web::delete().to(comments::delete_comment)),
                ),
        );
}

/// Unreadable query strings go through the same error translation.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

/// Read a request body the way a JSON body parser that never rejects does:
/// a missing body or a non-JSON content type yields an empty object, while
/// malformed JSON is a validation error.
fn parse_body<T>(req: &HttpRequest, body: &web::Bytes) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let content_type = req.content_type();
    let is_json = content_type == "application/json" || content_type.ends_with("+json");
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// A required field counts as present only when truthy.
fn present(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}
