pub mod auth;
pub mod docs;
pub mod health;
pub mod leave;
pub mod users;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{
    auth::require_bearer_auth,
    cors::permissive_cors,
    rate_limit::{rate_limit_middleware, RateLimiter},
};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    let auth_api: Router<AppState> = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .layer(from_fn_with_state(
            RateLimiter::per_second(state.config.auth_rps),
            rate_limit_middleware,
        ));

    let mut protected_api: Router<AppState> = Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/leave-application", post(leave::apply_leave))
        .route("/leave-application/:leave_id", put(leave::update_leave_status))
        .route("/leave-applications", get(leave::list_leave_applications))
        .route("/leave-balance/:employee_id", get(leave::get_leave_balance));

    if state.config.require_auth {
        protected_api =
            protected_api.layer(from_fn_with_state(state.clone(), require_bearer_auth));
    } else {
        tracing::warn!("REQUIRE_AUTH is disabled; leave and user routes are unauthenticated");
    }

    Router::new()
        .route("/health", get(health::health))
        .route("/api-doc/openapi.json", get(docs::openapi_json))
        .merge(auth_api)
        .merge(protected_api)
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}
