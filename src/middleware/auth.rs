//! JWT authentication middleware
//!
//! Extracts and verifies the bearer token, confirms the account still
//! exists, and injects the authenticated caller into the request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::repositories::user_repository::{UserRepository, UserStore};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Authenticated caller injected into gated requests.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
    pub roles: Vec<String>,
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)
        .map_err(|_| AppError::Unauthorized("Authorization header must be a Bearer token".to_string()))?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

    // The token may outlive the account; confirm the user still exists.
    let repository = UserRepository::new(state.pool.clone());
    let user = repository
        .find_by_username(&claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let authenticated = AuthenticatedUser {
        username: user.user.username,
        roles: user.roles,
    };
    tracing::debug!(
        "Authenticated {} with roles {:?}",
        authenticated.username,
        authenticated.roles
    );
    request.extensions_mut().insert(authenticated);

    Ok(next.run(request).await)
}
