//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use promptvault_core::error::CoreError;
use promptvault_core::roles::ROLE_MEMBER;
use promptvault_core::validate::{
    normalize_email, validate_email, validate_name, validate_password,
};
use promptvault_db::models::user::{CreateUser, PublicUser, User};
use promptvault_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult, FieldError};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create an account and return a session token plus the public user
/// projection. 409 when the email is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    // 1. Validate at the boundary, before touching storage. All field
    //    failures are collected and reported together.
    let mut errors = Vec::new();
    if let Err(e) = validate_name(&input.name) {
        errors.push(FieldError::new("name", e));
    }
    if let Err(e) = validate_email(&input.email) {
        errors.push(FieldError::new("email", e));
    }
    if let Err(e) = validate_password(&input.password) {
        errors.push(FieldError::new("password", e));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = normalize_email(&input.email);

    // 2. Pre-check the email; uq_users_email is the backstop under races.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already in use".into(),
        )));
    }

    // 3. Hash the password and persist with the member role.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            email,
            password_hash,
            role: ROLE_MEMBER.to_string(),
        },
    )
    .await?;

    let response = auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /auth/login
///
/// Authenticate with email + password. The failure is uniform: an unknown
/// email and a wrong password both return 401 `Invalid credentials`.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_email(&input.email) {
        errors.push(FieldError::new("email", e));
    }
    if input.password.is_empty() {
        errors.push(FieldError {
            field: "password",
            message: "Password is required".into(),
        });
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let email = normalize_email(&input.email);

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    Ok(Json(auth_response(&state, &user)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue a token for `user` and build the `{ token, user }` response.
fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let token = generate_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        user: PublicUser::from(user),
    })
}
