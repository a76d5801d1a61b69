use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{dto::auth_dto::UserResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.get_user(&user_id).await?;
    Ok(Json(user))
}
