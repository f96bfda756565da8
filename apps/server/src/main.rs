#![warn(clippy::all, clippy::pedantic)]

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};

mod db;
mod error;
mod routes;

use db::pool::{LibsqlManager, LibsqlPool};
use db::{Database, DatabaseImpl};
use error::AppError;
use logger::init_tracing;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let db_path = std::env::var("UPWATCH_DB").unwrap_or_else(|_| "upwatch.db".into());
    let database = libsql::Builder::new_local(&db_path).build().await?;

    let conn = database.connect()?;
    db::migrations::run_migrations(&conn).await?;

    let pool = LibsqlPool::builder(LibsqlManager::new(database)).build()?;
    let repository: Arc<dyn Database> = Arc::new(DatabaseImpl::new_from_pool(pool));

    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    run_server(addr, web::Data::from(repository)).await
}

async fn run_server(addr: SocketAddr, repository: web::Data<dyn Database>) -> Result<(), AppError> {
    HttpServer::new(move || App::new().app_data(repository.clone()).configure(routes::routes))
        .bind(addr)?
        .run()
        .await?;

    Ok(())
}
