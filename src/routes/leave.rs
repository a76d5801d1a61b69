use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::leave_dto::{
        ApplyLeavePayload, LeaveApplicationResponse, LeaveBalanceResponse, MessageResponse,
        StatusUpdateBody, StatusUpdateQuery,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/leave-application",
    request_body = ApplyLeavePayload,
    responses(
        (status = 200, description = "Leave application recorded", body = LeaveApplicationResponse),
        (status = 400, description = "Malformed employee ID, date or status")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
#[axum::debug_handler]
pub async fn apply_leave(
    State(state): State<AppState>,
    Json(payload): Json<ApplyLeavePayload>,
) -> Result<impl IntoResponse> {
    let leave = state.leave_service.apply(payload).await?;
    Ok(Json(leave))
}

#[utoipa::path(
    get,
    path = "/leave-applications",
    responses(
        (status = 200, description = "Up to 100 leave applications in insertion order", body = [LeaveApplicationResponse])
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
#[axum::debug_handler]
pub async fn list_leave_applications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let leaves = state.leave_service.list().await?;
    Ok(Json(leaves))
}

/// The status is read from the `status` query parameter; a JSON body
/// `{"status": ...}` is accepted as a fallback.
#[utoipa::path(
    put,
    path = "/leave-application/{leave_id}",
    params(
        ("leave_id" = String, Path, description = "Leave application ID"),
        StatusUpdateQuery
    ),
    request_body(content = StatusUpdateBody, description = "Optional body form of the status"),
    responses(
        (status = 200, description = "Leave status updated", body = MessageResponse),
        (status = 400, description = "Malformed ID or invalid status"),
        (status = 404, description = "Leave application not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
#[axum::debug_handler]
pub async fn update_leave_status(
    State(state): State<AppState>,
    Path(leave_id): Path<String>,
    Query(query): Query<StatusUpdateQuery>,
    body: Option<Json<StatusUpdateBody>>,
) -> Result<impl IntoResponse> {
    let status = query
        .status
        .or_else(|| body.and_then(|Json(body)| body.status));
    state
        .leave_service
        .update_status(&leave_id, status.as_deref())
        .await?;
    Ok(Json(MessageResponse::new("Leave status updated successfully")))
}

#[utoipa::path(
    get,
    path = "/leave-balance/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee (user) ID")
    ),
    responses(
        (status = 200, description = "Leave balance", body = LeaveBalanceResponse),
        (status = 400, description = "Malformed employee ID"),
        (status = 404, description = "Leave balance not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Leave"
)]
#[axum::debug_handler]
pub async fn get_leave_balance(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse> {
    let balance = state.leave_service.balance(&employee_id).await?;
    Ok(Json(balance))
}
