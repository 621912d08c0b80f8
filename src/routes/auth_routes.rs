use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    request.validate()?;

    let service = AuthService::new(
        UserRepository::new(state.pool.clone()),
        JwtConfig::from(&state.config),
    );
    let response = service.login(request).await?;

    Ok(Json(response))
}
