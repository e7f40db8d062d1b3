//! API Regression Tests
//!
//! In-process tests that build the Axum app via `create_app()` and exercise
//! the /api/v1/* endpoints using `tower::ServiceExt::oneshot()`.
//! No binary spawn, no network port — runs in CI without `#[ignore]`.

use wellsight::api::{create_app, DashboardState};
use wellsight::config;
use wellsight::model::{GradientBoostingModel, ModelArtifacts};
use wellsight::{DashboardConfig, ReferenceThresholds};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

fn ensure_config() {
    if !config::is_initialized() {
        config::init(DashboardConfig::default());
    }
}

fn training_order() -> Vec<String> {
    [
        "liquid_volume_m3_day",
        "water_volume_m3_day",
        "water_cut_%",
        "working_hours",
        "dynamic_level_m",
        "reservoir_pressure_atm",
        "year",
        "month",
        "day",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Stub state: constant model predicting 42.567, thresholds warn=70 / low=60.
fn create_test_state() -> DashboardState {
    let artifacts = ModelArtifacts::from_parts(
        GradientBoostingModel::constant(42.567, 9),
        training_order(),
    )
    .unwrap();
    DashboardState::new(
        ReferenceThresholds {
            water_cut_warn: 70.0,
            reservoir_pressure_low: 60.0,
        },
        artifacts,
    )
}

fn reading_body(water_cut: f64, reservoir_pressure: f64) -> String {
    serde_json::json!({
        "liquid_volume": 50.0,
        "water_volume": 20.0,
        "water_cut": water_cut,
        "working_hours": 12.0,
        "dynamic_level": 1000.0,
        "reservoir_pressure": reservoir_pressure,
        "year": 2020,
        "month": 6,
        "day": 15,
    })
    .to_string()
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// All GET endpoints should return 200.
#[tokio::test]
async fn test_get_endpoints_return_200() {
    ensure_config();

    let endpoints = [
        "/api/v1/health",
        "/api/v1/thresholds",
        "/api/v1/bounds?year=2016&month=2",
        "/health",
    ];

    for endpoint in &endpoints {
        let app = create_app(create_test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .uri(*endpoint)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(
            resp.status().is_success(),
            "GET {endpoint} returned status {}",
            resp.status()
        );
    }
}

/// /api/v1/thresholds returns the loaded percentile values in the envelope.
#[tokio::test]
async fn test_thresholds_payload() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/thresholds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["data"]["water_cut_warn"], 70.0);
    assert_eq!(json["data"]["reservoir_pressure_low"], 60.0);
    assert!(json["meta"]["timestamp"].is_string());
}

/// Bounds endpoint tracks leap-year February.
#[tokio::test]
async fn test_bounds_leap_year_day_range() {
    ensure_config();

    let app = create_app(create_test_state());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/bounds?year=2016&month=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = json_body(resp).await;
    assert_eq!(json["data"]["days_in_month"], 29);

    let app = create_app(create_test_state());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/bounds?year=2013&month=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = json_body(resp).await;
    assert_eq!(json["data"]["days_in_month"], 28);
}

/// End-to-end: stub model returning 42.567 must render "42.57" m3/day.
#[tokio::test]
async fn test_predict_formats_two_decimals() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(post_json("/api/v1/predict", reading_body(40.0, 150.0)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["data"]["display"], "42.57");
    assert_eq!(json["data"]["unit"], "m3/day");
    assert_eq!(json["data"]["date"], "15/6/2020");
    assert_eq!(json["data"]["reading"]["water_cut"], 40.0);
}

/// Out-of-range input is rejected with a BAD_REQUEST envelope.
#[tokio::test]
async fn test_predict_rejects_out_of_range() {
    ensure_config();
    let app = create_app(create_test_state());

    let body = serde_json::json!({
        "liquid_volume": 999.0,
        "water_volume": 20.0,
        "water_cut": 40.0,
        "working_hours": 12.0,
        "dynamic_level": 1000.0,
        "reservoir_pressure": 150.0,
        "year": 2020,
        "month": 6,
        "day": 15,
    })
    .to_string();

    let resp = app
        .oneshot(post_json("/api/v1/predict", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = json_body(resp).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

/// Day invariant enforced server-side: 2013-02-29 does not exist.
#[tokio::test]
async fn test_predict_rejects_invalid_day() {
    ensure_config();
    let app = create_app(create_test_state());

    let body = serde_json::json!({
        "liquid_volume": 50.0,
        "water_volume": 20.0,
        "water_cut": 40.0,
        "working_hours": 12.0,
        "dynamic_level": 1000.0,
        "reservoir_pressure": 150.0,
        "year": 2013,
        "month": 2,
        "day": 29,
    })
    .to_string();

    let resp = app
        .oneshot(post_json("/api/v1/predict", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

/// Simultaneous breach reports only the high water cut warning.
#[tokio::test]
async fn test_alert_priority_over_api() {
    ensure_config();
    let app = create_app(create_test_state());

    // 80 > 70 and 50 < 60 — both rules breached.
    let resp = app
        .oneshot(post_json("/api/v1/alert", reading_body(80.0, 50.0)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["data"]["alert"]["status"], "HighWaterCut");
    assert_eq!(json["data"]["alert"]["banner"], "warning");
}

/// In-range reading yields the success banner.
#[tokio::test]
async fn test_alert_nominal_over_api() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(post_json("/api/v1/alert", reading_body(40.0, 100.0)))
        .await
        .unwrap();

    let json = json_body(resp).await;
    assert_eq!(json["data"]["alert"]["status"], "Nominal");
    assert_eq!(json["data"]["alert"]["banner"], "success");
}

/// Zero gating values mean "not entered" — no alert is rendered.
#[tokio::test]
async fn test_alert_zero_sentinel_over_api() {
    ensure_config();
    let app = create_app(create_test_state());

    let resp = app
        .oneshot(post_json("/api/v1/alert", reading_body(0.0, 0.0)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert!(json["data"]["alert"].is_null());
}
