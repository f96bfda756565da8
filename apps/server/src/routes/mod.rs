pub mod checks;
pub mod health;
pub mod monitors;

use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_route)
        .service(monitors::create_monitor)
        .service(monitors::list_monitors)
        .service(monitors::list_public_monitors)
        .service(monitors::list_checks)
        .service(checks::create_check);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::db::Database;
    use crate::db::repository::tests::test_database;

    macro_rules! test_app {
        () => {{
            let repository: Arc<dyn Database> = Arc::new(test_database().await);
            test::init_service(App::new().app_data(web::Data::from(repository)).configure(routes))
                .await
        }};
    }

    #[actix_web::test]
    async fn test_health_route() {
        let app = test_app!();

        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(response.status().is_success());
    }

    #[actix_web::test]
    async fn test_monitor_lifecycle_and_check_ingestion() {
        let app = test_app!();

        // Create a monitor with defaults filled in by the server.
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/monitors")
                .set_json(json!({ "name": "api", "url": "https://example.com/health" }))
                .to_request(),
        )
        .await;
        let monitor_id = created["id"].as_i64().unwrap();
        assert_eq!(created["method"], "GET");
        assert_eq!(created["expected_statuses"], "200-399");

        // It shows up in the public (enabled) listing.
        let public: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/public/monitors").to_request(),
        )
        .await;
        assert_eq!(public.as_array().unwrap().len(), 1);
        assert_eq!(public[0]["id"].as_i64().unwrap(), monitor_id);

        // Ingest one check against it.
        let check: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post()
                .uri("/checks")
                .set_json(json!({
                    "monitor_id": monitor_id,
                    "status_code": 200,
                    "latency_ms": 35.02,
                    "ok": true,
                    "error_reason": null
                }))
                .to_request(),
        )
        .await;
        assert_eq!(check["monitor_id"].as_i64().unwrap(), monitor_id);
        assert_eq!(check["ok"], true);

        // And read it back.
        let checks: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get()
                .uri(&format!("/public/monitors/{monitor_id}/checks"))
                .to_request(),
        )
        .await;
        assert_eq!(checks.as_array().unwrap().len(), 1);
        assert_eq!(checks[0]["status_code"].as_i64().unwrap(), 200);
    }

    #[actix_web::test]
    async fn test_check_for_unknown_monitor_is_404() {
        let app = test_app!();

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/checks")
                .set_json(json!({ "monitor_id": 999, "ok": false }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 404);
    }

    #[actix_web::test]
    async fn test_disabled_monitor_is_hidden_from_public_listing() {
        let app = test_app!();

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/monitors")
                .set_json(json!({
                    "name": "paused",
                    "url": "https://example.com",
                    "is_enabled": false
                }))
                .to_request(),
        )
        .await;

        let all: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/monitors").to_request(),
        )
        .await;
        assert_eq!(all.as_array().unwrap().len(), 1);

        let public: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/public/monitors").to_request(),
        )
        .await;
        assert_eq!(public.as_array().unwrap().len(), 0);
    }
}
