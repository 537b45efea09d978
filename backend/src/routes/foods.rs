//! Food catalog routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::FoodService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use vitalis_shared::types::{CreateFoodRequest, FoodResponse};

pub fn food_routes() -> Router<AppState> {
    Router::new().route("/", post(create_food))
}

/// POST /api/v1/foods
async fn create_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFoodRequest>,
) -> ApiResult<(StatusCode, Json<FoodResponse>)> {
    let food = FoodService::create_food(&state.repos, auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(food)))
}
