use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::user::{Role, User};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "A")]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[validate(length(min = 1, message = "role must not be empty"))]
    #[schema(example = "employee")]
    pub role: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    #[schema(example = "p1")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "p1")]
    pub password: String,
}

/// Public shape of a user. Has no password field by construction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "6f9619ff-8b86-d011-b42d-00c04fc964ff")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "employee")]
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    #[schema(example = "bearer")]
    pub token_type: String,
    pub user_id: String,
}
