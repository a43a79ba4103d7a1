//! HTTP-level tests of the API surface: envelope shape, status mapping,
//! and the admin-token guard.

use actix_web::{test, web, App};
use cinecms_api::routes::configure_routes;
use cinecms_configs::ServerConfig;
use cinecms_core::AppContext;
use cinecms_store::test_utils::InMemoryBackend;
use serde_json::{json, Value};
use std::sync::Arc;

const ADMIN_TOKEN: &str = "test-admin-token";

fn test_context() -> Arc<AppContext> {
    let mut config = ServerConfig::default();
    config.security.admin_token = ADMIN_TOKEN.to_string();
    AppContext::init(Arc::new(InMemoryBackend::new()), config)
}

macro_rules! test_app {
    ($context:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($context.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", ADMIN_TOKEN))
}

#[actix_web::test]
async fn healthz_is_open() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn create_page_requires_admin_token() {
    let context = test_context();
    let app = test_app!(context);

    let body = json!({"title": "About", "slug": "about-us", "linkTarget": "ABOUT"});

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/pages")
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/pages")
            .insert_header(("Authorization", "Bearer wrong"))
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/pages")
            .insert_header(bearer())
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["success"], json!(true));
    assert_eq!(envelope["data"]["slug"], json!("about-us"));
    assert_eq!(envelope["data"]["status"], json!("Draft"));
}

#[actix_web::test]
async fn page_publish_cycle_over_http() {
    let context = test_context();
    let app = test_app!(context);

    let create = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/pages")
            .insert_header(bearer())
            .insert_header(("X-User-Id", "editor-1"))
            .set_json(json!({
                "title": "About us",
                "slug": "about-us",
                "linkTarget": "ABOUT",
                "components": [
                    {"type": "Hero", "configuration": {"heading": "Hi"}, "order": 0, "componentId": "c1"}
                ]
            }))
            .to_request(),
    )
    .await;
    let envelope: Value = test::read_body_json(create).await;
    let id = envelope["data"]["id"].as_str().unwrap().to_string();

    // Unpublished pages are not publicly visible
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/pages/by-slug/about-us")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let publish = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/pages/{}/publish", id))
            .insert_header(bearer())
            .to_request(),
    )
    .await;
    assert!(publish.status().is_success());
    let envelope: Value = test::read_body_json(publish).await;
    assert_eq!(envelope["data"]["isPublished"], json!(true));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/pages/by-slug/about-us")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["data"]["id"], json!(id));

    // Publishing again is an invalid state → 400
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/pages/{}/publish", id))
            .insert_header(bearer())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn update_with_mismatched_id_is_rejected() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/pages/abc")
            .insert_header(bearer())
            .set_json(json!({
                "id": "different",
                "title": "T",
                "slug": "t",
                "linkTarget": "T"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["success"], json!(false));
    assert_eq!(envelope["message"], json!("ID mismatch"));
}

#[actix_web::test]
async fn invalid_page_payload_returns_field_errors() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/pages")
            .insert_header(bearer())
            .set_json(json!({"title": "", "slug": "Bad Slug", "linkTarget": "bad-target"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["success"], json!(false));
    assert_eq!(envelope["errors"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn job_endpoints_enforce_running_guard_statuses() {
    let context = test_context();
    let app = test_app!(context);

    let create = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/jobs")
            .insert_header(bearer())
            .set_json(json!({
                "name": "Nightly sitemap",
                "type": "generate_sitemap",
                "scheduleType": "recurring",
                "cronExpression": "0 0 3 * * *",
                "startImmediately": true
            }))
            .to_request(),
    )
    .await;
    assert!(create.status().is_success());
    let envelope: Value = test::read_body_json(create).await;
    let id = envelope["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(envelope["data"]["status"], json!("Pending"));

    // Cancel a pending job: allowed, next run cleared
    let cancel = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/jobs/{}/cancel", id))
            .insert_header(bearer())
            .to_request(),
    )
    .await;
    assert!(cancel.status().is_success());
    let envelope: Value = test::read_body_json(cancel).await;
    assert_eq!(envelope["data"]["status"], json!("Cancelled"));
    assert!(envelope["data"].get("nextRun").is_none());

    // Start it again
    let start = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/jobs/{}/start", id))
            .insert_header(bearer())
            .to_request(),
    )
    .await;
    assert!(start.status().is_success());

    let list = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/jobs?status=pending")
            .to_request(),
    )
    .await;
    let envelope: Value = test::read_body_json(list).await;
    assert_eq!(envelope["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn unknown_job_type_is_a_validation_error() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/jobs")
            .insert_header(bearer())
            .set_json(json!({
                "name": "Mystery",
                "type": "defragment_moon",
                "scheduleType": "run_once"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn missing_job_is_404() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/jobs/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn movie_catalog_round_trip() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/movies")
            .insert_header(bearer())
            .set_json(json!({"title": "Alien", "slug": "alien", "genres": ["Horror"]}))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/movies/by-slug/alien")
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["data"]["title"], json!("Alien"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/movies?searchTerm=ali")
            .to_request(),
    )
    .await;
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["data"]["totalCount"], json!(1));
}

#[actix_web::test]
async fn feature_flag_round_trip() {
    let context = test_context();
    let app = test_app!(context);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/feature-flags/new-homepage")
            .insert_header(bearer())
            .set_json(json!({"name": "New homepage", "isEnabled": true}))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/feature-flags/new-homepage")
            .to_request(),
    )
    .await;
    let envelope: Value = test::read_body_json(resp).await;
    assert_eq!(envelope["data"]["isEnabled"], json!(true));
    assert_eq!(envelope["data"]["audiencePercentage"], json!(100));
}
