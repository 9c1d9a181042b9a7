use axum::body::Body;
use axum::http::{Request, header};
use tower::ServiceExt;

use super::*;

fn config(cors_allow_origin: Option<&str>) -> ServerConfig {
    ServerConfig {
        port: 0,
        upstream_api_url: "http://127.0.0.1:9".to_owned(),
        upstream_timeout_secs: 1,
        cors_allow_origin: cors_allow_origin.map(ToOwned::to_owned),
    }
}

fn router(cors_allow_origin: Option<&str>) -> Router {
    let config = config(cors_allow_origin);
    let proxy = ApiProxy::new(&config).unwrap();
    api_routes(&config, proxy)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = router(None)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let req = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "https://elsewhere.test")
        .body(Body::empty())
        .unwrap();
    let resp = router(None).oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_echoes_configured_origin() {
    let req = Request::builder()
        .uri("/healthz")
        .header(header::ORIGIN, "https://admin.weather.test")
        .body(Body::empty())
        .unwrap();
    let resp = router(Some("https://admin.weather.test")).oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("https://admin.weather.test")
    );
}

#[tokio::test]
async fn api_paths_are_routed_to_proxy() {
    // Port 9 (discard) refuses connections, so a routed request surfaces as 502.
    let req = Request::builder().uri("/api/v1/dashboard/summary").body(Body::empty()).unwrap();
    let resp = router(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unknown_paths_outside_api_are_not_found() {
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let resp = router(None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
