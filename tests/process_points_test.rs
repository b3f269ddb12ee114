use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use axum_test::TestServer;
use serde_json::{json, Value};
use tower::ServiceExt;

use geo_processor::app;

fn server() -> TestServer {
    TestServer::new(app()).expect("test server should start")
}

#[tokio::test]
async fn test_process_points_ok_two_points() {
    let server = server();
    let payload = json!({
        "points": [
            {"lat": 40.7128, "lng": -74.0060},
            {"lat": 34.0522, "lng": -118.2437},
        ]
    });

    let response = server.post("/process").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let centroid = &body["centroid"];
    let bounds = &body["bounds"];

    assert!((centroid["lat"].as_f64().unwrap() - 37.3825).abs() < 1e-9);
    assert!((centroid["lng"].as_f64().unwrap() - -96.12485).abs() < 1e-9);

    assert_eq!(
        bounds,
        &json!({"north": 40.7128, "south": 34.0522, "east": -74.0060, "west": -118.2437})
    );
}

#[tokio::test]
async fn test_process_points_ok_single_point() {
    let server = server();
    let payload = json!({"points": [{"lat": 10.0, "lng": 20.0}]});

    let response = server.post("/process").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    // Centroid and bounds collapse into the same point
    assert_eq!(body["centroid"], json!({"lat": 10.0, "lng": 20.0}));
    assert_eq!(
        body["bounds"],
        json!({"north": 10.0, "south": 10.0, "east": 20.0, "west": 20.0})
    );
}

#[tokio::test]
async fn test_process_points_bad_request() {
    let payloads = [
        // Missing 'points'
        json!({}),
        // 'points' is not an array
        json!({"points": "no-array"}),
        json!({"points": 123}),
        json!({"points": {"lat": 1, "lng": 2}}),
        // Empty array
        json!({"points": []}),
        // Missing lat
        json!({"points": [{"lng": 20.0}]}),
        // Missing lng
        json!({"points": [{"lat": 10.0}]}),
        // Invalid types
        json!({"points": [{"lat": "10.0", "lng": 20.0}]}),
        json!({"points": [{"lat": 10.0, "lng": "20.0"}]}),
        // Out of range lat
        json!({"points": [{"lat": -91.0, "lng": 0.0}]}),
        json!({"points": [{"lat": 91.0, "lng": 0.0}]}),
        // Out of range lng
        json!({"points": [{"lat": 0.0, "lng": -181.0}]}),
        json!({"points": [{"lat": 0.0, "lng": 181.0}]}),
        // Mixed valid and invalid
        json!({"points": [{"lat": 0.0, "lng": 0.0}, {"lat": 1000.0, "lng": 0.0}]}),
    ];

    let server = server();
    for payload in &payloads {
        let response = server.post("/process").json(payload).await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "payload should be rejected: {}",
            payload
        );

        let body: Value = response.json();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("must have 'points' as a non-empty array"),
            "unexpected error message: {}",
            body["error"]
        );
        if body.get("details").is_some() {
            assert!(body["details"].is_array());
        }
    }
}

#[tokio::test]
async fn test_process_points_body_not_json() {
    let server = server();

    let response = server.post("/process").text("not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].is_string());
    // No field-level details can be derived from an unparseable body
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_process_points_extra_fields_ignored() {
    let server = server();
    let payload = json!({"points": [{"lat": 1.0, "lng": 2.0, "foo": "bar"}]});

    let response = server.post("/process").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["centroid"], json!({"lat": 1.0, "lng": 2.0}));
    assert_eq!(
        body["bounds"],
        json!({"north": 1.0, "south": 1.0, "east": 2.0, "west": 2.0})
    );
    assert!(body["centroid"].get("foo").is_none());
}

#[tokio::test]
async fn test_process_points_details_name_the_offending_field() {
    let server = server();
    let payload = json!({"points": [{"lat": 0.0, "lng": 0.0}, {"lat": 95.0, "lng": 0.0}]});

    let response = server.post("/process").json(&payload).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["field"], "points[1].lat");
    assert_eq!(details[0]["kind"], "lat_out_of_range");
}

#[tokio::test]
async fn test_process_only_accepts_post() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/process")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_process_points_repeat_request_is_identical() {
    let server = server();
    let payload = json!({
        "points": [
            {"lat": 40.7128, "lng": -74.0060},
            {"lat": 34.0522, "lng": -118.2437},
            {"lat": 41.8781, "lng": -87.6298},
        ]
    });

    let first: Value = server.post("/process").json(&payload).await.json();
    let second: Value = server.post("/process").json(&payload).await.json();

    assert_eq!(first, second);
}
