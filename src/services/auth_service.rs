use std::sync::Arc;

use chrono::Duration;
use validator::Validate;

use crate::config::Config;
use crate::database::store::LeaveStore;
use crate::dto::auth_dto::{LoginPayload, RegisterPayload, TokenResponse, UserResponse};
use crate::error::{Error, Result};
use crate::models::{
    id::RecordId,
    user::{NewUser, Role},
};
use crate::utils::{crypto, token};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn LeaveStore>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(store: Arc<dyn LeaveStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    pub async fn register(&self, mut payload: RegisterPayload) -> Result<UserResponse> {
        payload.name = payload.name.trim().to_string();
        payload.validate()?;
        let role: Role = payload.role.parse().map_err(Error::BadRequest)?;
        let email = normalize_email(&payload.email);

        if self.store.find_user_by_email(&email).await?.is_some() {
            tracing::info!(email = %email, "Registration rejected: email already registered");
            return Err(Error::Conflict("Email already registered".to_string()));
        }

        let password_hash = crypto::hash_password(&payload.password)
            .map_err(|e| Error::Internal(format!("Password hashing failed: {}", e)))?;

        let user = self
            .store
            .insert_user(NewUser {
                name: payload.name,
                email,
                role,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(UserResponse::from(user))
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<TokenResponse> {
        payload.validate()?;
        let email = normalize_email(&payload.email);

        let Some(user) = self.store.find_user_by_email(&email).await? else {
            tracing::warn!(email = %email, "Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !crypto::verify_password(&payload.password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(invalid_credentials());
        }

        let subject = user.id.to_string();
        let access_token = token::issue_token(
            &subject,
            Some(user.role.as_str()),
            Some(Duration::minutes(self.config.access_token_ttl_minutes)),
            &self.config.jwt_secret,
        )
        .map_err(|e| Error::Internal(format!("Token signing failed: {}", e)))?;

        tracing::info!(user_id = %user.id, "Login successful");
        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            user_id: subject,
        })
    }

    pub async fn get_user(&self, raw_id: &str) -> Result<UserResponse> {
        let id = RecordId::parse(raw_id)?;
        let user = self
            .store
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;
        Ok(UserResponse::from(user))
    }

    pub fn authenticate(&self, bearer: &str) -> Result<token::Claims> {
        token::verify_token(bearer, &self.config.jwt_secret)
            .map_err(|e| Error::Unauthorized(format!("Invalid or expired token: {}", e)))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> Error {
    Error::Unauthorized("Invalid credentials".to_string())
}
