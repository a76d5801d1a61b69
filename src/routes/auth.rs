use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::auth_dto::{LoginPayload, RegisterPayload, TokenResponse, UserResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterPayload,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Email already registered or invalid payload"),
        (status = 500, description = "Storage failure")
    ),
    tag = "Auth"
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.register(payload).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Signed bearer token", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let token = state.auth_service.login(payload).await?;
    Ok(Json(token))
}
