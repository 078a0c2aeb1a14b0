use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{HealthProfile, NutrientSnapshot, UserId};
use super::repository::ProfileRepository;
use super::service::{MealRatingService, ServiceError};

/// Router builder exposing HTTP endpoints for profiles and ratings.
pub fn rating_router<R>(service: Arc<MealRatingService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/rating", post(rate_handler::<R>))
        .route(
            "/api/v1/users/:user_id/profile",
            put(save_profile_handler::<R>).get(fetch_profile_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/rating",
            post(rate_for_user_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateRequest {
    pub(crate) nutrients: NutrientSnapshot,
    #[serde(default)]
    pub(crate) profile: Option<HealthProfile>,
    #[serde(default)]
    pub(crate) food: Option<FoodDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FoodDetails {
    #[serde(default)]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserRateRequest {
    pub(crate) nutrients: NutrientSnapshot,
    #[serde(default)]
    pub(crate) food: Option<FoodDetails>,
}

pub(crate) async fn rate_handler<R>(
    State(service): State<Arc<MealRatingService<R>>>,
    axum::Json(request): axum::Json<RateRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let description = request
        .food
        .as_ref()
        .and_then(|food| food.description.as_deref());

    match service.rate(request.profile.as_ref(), &request.nutrients, description) {
        Ok(rating) => (StatusCode::OK, axum::Json(rating)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rate_for_user_handler<R>(
    State(service): State<Arc<MealRatingService<R>>>,
    Path(user_id): Path<String>,
    axum::Json(request): axum::Json<UserRateRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let user_id = UserId(user_id);
    let description = request
        .food
        .as_ref()
        .and_then(|food| food.description.as_deref());

    match service.rate_for_user(&user_id, &request.nutrients, description) {
        Ok(rating) => (StatusCode::OK, axum::Json(rating)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn save_profile_handler<R>(
    State(service): State<Arc<MealRatingService<R>>>,
    Path(user_id): Path<String>,
    axum::Json(profile): axum::Json<HealthProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.save_profile(UserId(user_id), profile) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_profile_handler<R>(
    State(service): State<Arc<MealRatingService<R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    let user_id = UserId(user_id);
    match service.profile(&user_id) {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": "profile not found",
                "user_id": user_id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Validation failures must never yield a partial or default score: they map
/// to 400 with no rating body.
fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
