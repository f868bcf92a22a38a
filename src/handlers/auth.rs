// src/handlers/auth.rs

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedEmployee,
    models::auth::{AuthResponse, Employee, LoginPayload, RegisterEmployeePayload},
};

// Handler de registro
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterEmployeePayload,
    responses(
        (status = 200, body = AuthResponse),
        (status = 409, description = "E-mail já em uso")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterEmployeePayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .register_employee(&payload.email, &payload.password, &payload.full_name)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginPayload,
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state
        .auth_service
        .login_employee(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse { token }))
}

// Handler da rota protegida /me
#[utoipa::path(
    get,
    path = "/api/employees/me",
    responses((status = 200, body = Employee)),
    security(("api_jwt" = [])),
    tag = "Auth"
)]
pub async fn get_me(AuthenticatedEmployee(employee): AuthenticatedEmployee) -> Json<Employee> {
    Json(employee)
}
