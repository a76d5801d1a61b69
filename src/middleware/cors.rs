use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Any origin, limited to the verbs and headers the API actually uses.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(Any)
}
