use super::common::*;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

fn json_post(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

fn json_put(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::put(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("request builds")
}

fn sample_nutrients_json() -> serde_json::Value {
    json!({
        "calories": 650.0,
        "protein_g": 30.0,
        "fat_g": 28.0,
        "carbs_g": 55.0,
        "fiber_g": 6.0,
        "sugar_g": 12.0,
        "sodium_mg": 1400.0,
    })
}

#[tokio::test]
async fn stateless_rating_returns_score_and_breakdown() {
    let (service, _) = build_service();
    let router = rating_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/api/v1/rating",
            json!({
                "nutrients": sample_nutrients_json(),
                "profile": { "age": 45, "gender": "male", "allergies": "hypertension" },
                "food": { "description": "Cheese pizza" },
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let score = body["score"].as_f64().expect("score present");
    assert!((0.0..=100.0).contains(&score));
    assert!(body["profile_used"].as_bool().expect("flag present"));
    let breakdown = body["breakdown"].as_array().expect("breakdown present");
    assert!(breakdown
        .iter()
        .any(|entry| entry["component"] == "sodium_limit"));
}

#[tokio::test]
async fn validation_failure_returns_400_without_a_score() {
    let (service, _) = build_service();
    let router = rating_router_with_service(service);

    let mut nutrients = sample_nutrients_json();
    nutrients["sodium_mg"] = json!(-1.0);

    let response = router
        .oneshot(json_post(
            "/api/v1/rating",
            json!({ "nutrients": nutrients }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"].as_str().expect("error message").contains("sodium_mg"));
    assert!(body.get("score").is_none());
}

#[tokio::test]
async fn profile_round_trip_through_the_router() {
    let (service, _) = build_service();
    let router = rating_router_with_service(service);

    let response = router
        .clone()
        .oneshot(json_put(
            "/api/v1/users/user-9/profile",
            json!({ "age": 45, "gender": "male", "allergies": "hypertension" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/users/user-9/profile")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["profile"]["allergies"], "hypertension");

    let response = router
        .oneshot(json_post(
            "/api/v1/users/user-9/rating",
            json!({ "nutrients": sample_nutrients_json() }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body["profile_used"].as_bool().expect("flag present"));
}

#[tokio::test]
async fn unknown_profile_returns_404() {
    let (service, _) = build_service();
    let router = rating_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/users/ghost/profile")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rating_for_unknown_user_still_succeeds() {
    let (service, _) = build_service();
    let router = rating_router_with_service(service);

    let response = router
        .oneshot(json_post(
            "/api/v1/users/ghost/rating",
            json!({ "nutrients": sample_nutrients_json() }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(!body["profile_used"].as_bool().expect("flag present"));
}
