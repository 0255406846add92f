//! Authentication handlers.

use actix_web::{HttpResponse, web};

use tracker_core::services::AuthenticatedUser;
use tracker_core::validation::{LoginInput, RegisterInput};
use tracker_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn auth_response(user: AuthenticatedUser) -> AuthResponse {
    AuthResponse {
        user: UserResponse {
            id: user.user_id.to_string(),
            name: user.name,
            email: user.email,
            token: user.token,
        },
    }
}

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .auth
        .register(RegisterInput {
            email: req.email,
            name: req.name,
            password: req.password,
        })
        .await?;

    tracing::info!(user_id = %user.user_id, "User registered");

    Ok(HttpResponse::Created().json(auth_response(user)))
}

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .auth
        .login(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    tracing::debug!(user_id = %user.user_id, "User logged in");

    Ok(HttpResponse::Ok().json(auth_response(user)))
}
