//! Profile metrics for the authenticated user

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use vitalis_shared::types::UserProfileResponse;

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile))
}

/// GET /api/v1/profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserProfileResponse>> {
    let profile = ProfileService::get_user_profile(&state.repos, state.dates(), auth.user_id).await?;
    Ok(Json(profile))
}
