use actix_web::{HttpResponse, Responder, post, web};

use crate::db::Database;
use crate::db::models::NewCheck;
use crate::error::ApiError;

/// Ingest one check result from the engine.
///
/// The monitor reference is verified here; a check may never point at a
/// monitor that does not exist.
#[post("/checks")]
pub async fn create_check(
    repository: web::Data<dyn Database>,
    body: web::Json<NewCheck>,
) -> Result<impl Responder, ApiError> {
    if repository.get_monitor(body.monitor_id).await?.is_none() {
        return Err(ApiError::MonitorNotFound(body.monitor_id));
    }

    let check = repository.create_check(&body).await?;
    Ok(HttpResponse::Ok().json(check))
}
