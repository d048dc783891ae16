//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::validate_credentials;
use crate::domain::DomainError;


/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Body of both register and login requests
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Register a new user
///
/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    validate_credentials(&request.username, &request.password)
        .map_err(|e| DomainError::validation(e.to_string()))?;

    state
        .credentials
        .register(&request.username, &request.password)
        .await
        .map_err(|e| ApiError::registration_failed(&e))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user created successfully".to_string(),
        }),
    ))
}

/// Login with username and password
///
/// POST /login
///
/// Unknown users and wrong passwords get the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .credentials
        .authenticate(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token: state.credentials.issue_token(&user),
    }))
}
