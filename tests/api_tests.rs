// tests/api_tests.rs
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use teststand_panel::api::{configure_assets, configure_routes, AppState};
use teststand_panel::config::{AppConfig, FileConfig};
use teststand_panel::endpoint::Endpoint;
use teststand_panel::errors::{PanelError, Result};
use teststand_panel::rpc::GlibControlService;

struct Boards(Vec<&'static str>);

#[async_trait]
impl GlibControlService for Boards {
    async fn connected_cbc_names(&self, _names: Vec<String>) -> Result<Vec<String>> {
        if self.0.is_empty() {
            return Err(PanelError::Protocol("no boards".to_string()));
        }
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

/// First call answers `["old"]` slowly, every later call `["new"]` at once.
struct SlowFirstCall {
    calls: AtomicUsize,
}

#[async_trait]
impl GlibControlService for SlowFirstCall {
    async fn connected_cbc_names(&self, _names: Vec<String>) -> Result<Vec<String>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_millis(200)).await;
            return Ok(vec!["old".to_string()]);
        }
        Ok(vec!["new".to_string()])
    }
}

fn state_with(service: impl GlibControlService + 'static) -> AppState {
    let config = AppConfig::from_sources(FileConfig::default(), |_| None).unwrap();
    let endpoint = Endpoint::resolve(&config.base_url);
    AppState::new(config, endpoint, Arc::new(service))
}

#[actix_web::test]
async fn test_status_starts_initialising() {
    let state = state_with(Boards(vec!["cbc0"]));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["text"], "Initialising...");
    assert_eq!(body["revision"], 0);
    assert_eq!(
        body["endpoint"],
        "http://127.0.0.1:8080/gui/../cbcTestStand/services/GlibControlProxy"
    );
}

#[actix_web::test]
async fn test_refresh_posts_outcome_to_board() {
    let state = state_with(Boards(vec!["cbc0", "cbc1"]));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/v1/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);

    for _ in 0..50 {
        if state.board.snapshot().revision > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let req = test::TestRequest::get().uri("/api/v1/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], "Result is cbc0, cbc1, ");
    assert_eq!(body["revision"], 1);
}

#[actix_web::test]
async fn test_failed_refresh_shows_reason() {
    let state = state_with(Boards(vec![]));

    state.refresh().await.unwrap();

    assert_eq!(
        state.board.snapshot().text,
        "Failed due to Malformed JSON-RPC response: no boards"
    );
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().configure(configure_routes)).await;
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_overlapping_refreshes_keep_latest_call() {
    let state = state_with(SlowFirstCall { calls: AtomicUsize::new(0) });

    let slow = state.refresh();
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fast = state.refresh();
    fast.await.unwrap();
    slow.await.unwrap();

    let snapshot = state.board.snapshot();
    assert_eq!(snapshot.text, "Result is new, ");
    assert_eq!(snapshot.revision, 1);
    assert_eq!(snapshot.call, 2);
}

#[actix_web::test]
async fn test_panel_page_is_served() {
    let app = test::init_service(
        App::new()
            .configure(configure_routes)
            .configure(configure_assets),
    )
    .await;

    for uri in ["/", "/gui/", "/index.html"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Initialising..."));
    }

    let req = test::TestRequest::get().uri("/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
