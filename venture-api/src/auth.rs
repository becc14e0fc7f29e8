//! JWT Authentication
//!
//! Bearer-token auth for the game API. Login mints an HS256 token
//! whose claims carry the user id, team id and role; the middleware
//! validates it and stores the claims in request extensions, so
//! handlers receive an already-authenticated caller context.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Validation};
use serde::{Deserialize, Serialize};

use venture_core::{AuthContext, Role, TeamId, User, UserId};

use crate::error::ErrorResponse;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for HS256
    pub secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

/// Error type for JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfigError {
    pub message: String,
}

impl std::fmt::Display for JwtConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JWT config error: {}", self.message)
    }
}

impl std::error::Error for JwtConfigError {}

impl JwtConfig {
    /// Minimum secret length for security
    const MIN_SECRET_LENGTH: usize = 32;

    /// Default token lifetime: 30 days, matching the session length
    /// players expect for a long-running game.
    const DEFAULT_TTL_SECS: i64 = 30 * 24 * 60 * 60;

    /// Create a new JWT config. The secret must be at least 32 bytes.
    pub fn try_new(secret: impl Into<String>) -> Result<Self, JwtConfigError> {
        let secret = secret.into();
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtConfigError {
                message: format!(
                    "JWT secret must be at least {} bytes, got {}",
                    Self::MIN_SECRET_LENGTH,
                    secret.len()
                ),
            });
        }
        Ok(Self {
            secret,
            token_ttl_secs: Self::DEFAULT_TTL_SECS,
        })
    }

    /// Set the token lifetime
    pub fn with_token_ttl(mut self, secs: i64) -> Self {
        self.token_ttl_secs = secs;
        self
    }
}

/// JWT claims carried by every session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user id
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// User role (MEMBER, ADMIN)
    pub role: String,
    /// Team the user belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl Claims {
    /// Resolve the claims to the caller context the game services
    /// accept.
    pub fn to_context(&self) -> Result<AuthContext, AuthError> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| AuthError::ValidationFailed(format!("unknown role: {}", self.role)))?;

        Ok(AuthContext::new(
            UserId::new(self.sub.clone()),
            self.team_id.clone().map(TeamId::new),
            role,
        ))
    }
}

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingToken,
    /// Invalid token format
    InvalidTokenFormat,
    /// Token validation failed
    ValidationFailed(String),
    /// Token expired
    TokenExpired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AuthError::MissingToken => (
                "MISSING_TOKEN",
                "Authorization header is required".to_string(),
            ),
            AuthError::InvalidTokenFormat => (
                "INVALID_TOKEN_FORMAT",
                "Invalid authorization header format. Expected: Bearer <token>".to_string(),
            ),
            AuthError::ValidationFailed(msg) => ("TOKEN_VALIDATION_FAILED", msg),
            AuthError::TokenExpired => ("TOKEN_EXPIRED", "Token has expired".to_string()),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Mint a session token for an authenticated user.
pub fn issue_token(user: &User, config: &JwtConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.as_str().to_string(),
        exp: (now + config.token_ttl_secs) as u64,
        iat: now as u64,
        role: user.role.as_str().to_string(),
        team_id: user.team_id.as_ref().map(|id| id.as_str().to_string()),
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::ValidationFailed(e.to_string()))
}

/// Extract the bearer token from an Authorization header value.
pub fn extract_token(auth_header: &str) -> Result<&str, AuthError> {
    if !auth_header.starts_with("Bearer ") {
        return Err(AuthError::InvalidTokenFormat);
    }
    Ok(&auth_header[7..])
}

/// Validate a token and extract its claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
            AuthError::TokenExpired
        } else {
            AuthError::ValidationFailed(e.to_string())
        }
    })?;

    Ok(token_data.claims)
}

/// Authentication state for sharing config
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<JwtConfig>,
}

impl AuthState {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Require authentication middleware
///
/// Validates the bearer token and stores claims in request extensions
/// for downstream handlers.
pub async fn require_auth(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_token(auth_header)?;
    let claims = validate_token(token, &auth_state.config)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
