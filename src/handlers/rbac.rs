// src/handlers/rbac.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PrivHrWrite, RequirePrivilege},
    models::rbac::{CreateRolePayload, Privilege, RoleResponse},
};

#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRolePayload,
    responses((status = 201, body = RoleResponse)),
    security(("api_jwt" = [])),
    tag = "HR"
)]
pub async fn create_role(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivHrWrite>,
    Json(payload): Json<CreateRolePayload>,
) -> Result<impl IntoResponse, AppError> {
    let role = app_state
        .rbac_service
        .create_role_with_privileges(payload.name, payload.description, payload.privileges)
        .await?;

    Ok((StatusCode::CREATED, Json(role)))
}

#[utoipa::path(
    get,
    path = "/api/privileges",
    responses((status = 200, body = Vec<Privilege>)),
    security(("api_jwt" = [])),
    tag = "HR"
)]
pub async fn list_privileges(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let privileges = app_state.rbac_service.list_system_privileges().await?;

    Ok((StatusCode::OK, Json(privileges)))
}

#[utoipa::path(
    post,
    path = "/api/employees/{id}/roles/{role_id}",
    responses((status = 200), (status = 404)),
    security(("api_jwt" = [])),
    tag = "HR"
)]
pub async fn assign_role(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivHrWrite>,
    Path((employee_id, role_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .rbac_service
        .assign_role_to_employee(employee_id, role_id)
        .await?;

    Ok(StatusCode::OK)
}
