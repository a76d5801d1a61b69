pub mod auth_dto;
pub mod leave_dto;
