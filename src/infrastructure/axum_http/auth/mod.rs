use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::config_model::Auth, infrastructure::axum_http::error_responses::AppError};

/// Claims carried by the portal's session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub exp: usize,
}

/// Key material and cookie name used to authenticate requests. Installed as a
/// request extension by the HTTP server.
pub struct AuthSettings {
    decoding_key: DecodingKey,
    cookie_name: String,
}

impl AuthSettings {
    pub fn new(jwt_secret: &str, cookie_name: impl Into<String>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            cookie_name: cookie_name.into(),
        }
    }

    pub fn validate_session_token(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}

impl From<&Auth> for AuthSettings {
    fn from(auth: &Auth) -> Self {
        Self::new(&auth.jwt_secret, auth.cookie_name.clone())
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid Authorization header format")]
    InvalidHeader,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Invalid user ID in token")]
    MissingUserId,
    #[error("authentication is not configured")]
    NotConfigured,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::NotConfigured => AppError::Internal(self.into()).into_response(),
            _ => AppError::Unauthorized(self.to_string()).into_response(),
        }
    }
}

/// Session cookie first, then `Authorization: Bearer <token>`.
fn extract_token(parts: &Parts, cookie_name: &str) -> Result<String, AuthError> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Ok(cookie.value().to_string());
        }
    }

    let auth_header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidHeader)?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidHeader),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let settings = parts
            .extensions
            .get::<Arc<AuthSettings>>()
            .cloned()
            .ok_or(AuthError::NotConfigured)?;

        let token = extract_token(parts, &settings.cookie_name)?;
        let claims = settings.validate_session_token(&token)?;

        if claims.user_id.trim().is_empty() {
            return Err(AuthError::MissingUserId);
        }

        Ok(AuthUser {
            user_id: claims.user_id,
        })
    }
}
