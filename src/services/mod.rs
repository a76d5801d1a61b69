pub mod auth_service;
pub mod leave_service;
