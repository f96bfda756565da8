use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;

use crate::db::Database;
use crate::db::models::NewMonitor;
use crate::error::ApiError;

const DEFAULT_CHECK_LIMIT: usize = 50;
const MAX_CHECK_LIMIT: usize = 500;

#[post("/monitors")]
pub async fn create_monitor(
    repository: web::Data<dyn Database>,
    body: web::Json<NewMonitor>,
) -> Result<impl Responder, ApiError> {
    let monitor = repository.create_monitor(&body).await?;
    Ok(HttpResponse::Ok().json(monitor))
}

#[get("/monitors")]
pub async fn list_monitors(
    repository: web::Data<dyn Database>,
) -> Result<impl Responder, ApiError> {
    let monitors = repository.list_monitors().await?;
    Ok(HttpResponse::Ok().json(monitors))
}

/// Enabled monitors only; this is the set the engine polls.
#[get("/public/monitors")]
pub async fn list_public_monitors(
    repository: web::Data<dyn Database>,
) -> Result<impl Responder, ApiError> {
    let monitors = repository.list_enabled_monitors().await?;
    Ok(HttpResponse::Ok().json(monitors))
}

#[derive(Debug, Deserialize)]
pub struct ChecksQuery {
    limit: Option<usize>,
}

#[get("/public/monitors/{monitor_id}/checks")]
pub async fn list_checks(
    repository: web::Data<dyn Database>,
    path: web::Path<i64>,
    query: web::Query<ChecksQuery>,
) -> Result<impl Responder, ApiError> {
    let monitor_id = path.into_inner();
    let limit = query.limit.unwrap_or(DEFAULT_CHECK_LIMIT).clamp(1, MAX_CHECK_LIMIT);

    let checks = repository.list_checks(monitor_id, limit).await?;
    Ok(HttpResponse::Ok().json(checks))
}
