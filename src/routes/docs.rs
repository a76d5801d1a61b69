use axum::response::{IntoResponse, Json};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::dto::{
    auth_dto::{LoginPayload, RegisterPayload, TokenResponse, UserResponse},
    leave_dto::{
        ApplyLeavePayload, LeaveApplicationResponse, LeaveBalanceResponse, MessageResponse,
        StatusUpdateBody,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management API",
        version = "0.1.0",
        description = "Registers users, records leave applications, updates their status and reports leave balances."
    ),
    paths(
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::get_user,
        crate::routes::leave::apply_leave,
        crate::routes::leave::list_leave_applications,
        crate::routes::leave::update_leave_status,
        crate::routes::leave::get_leave_balance,
        crate::routes::health::health
    ),
    components(
        schemas(
            RegisterPayload,
            LoginPayload,
            UserResponse,
            TokenResponse,
            ApplyLeavePayload,
            LeaveApplicationResponse,
            StatusUpdateBody,
            LeaveBalanceResponse,
            MessageResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "User lookup"),
        (name = "Leave", description = "Leave applications and balances"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
