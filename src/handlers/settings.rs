// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PrivSettingsWrite, RequirePrivilege},
    models::settings::{HotelSettings, UpdateSettingsPayload},
};

#[utoipa::path(
    get,
    path = "/api/settings",
    responses((status = 200, body = HotelSettings)),
    security(("api_jwt" = [])),
    tag = "Settings"
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.settings_repo.get_settings().await?;

    Ok((StatusCode::OK, Json(settings)))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsPayload,
    responses((status = 200, body = HotelSettings)),
    security(("api_jwt" = [])),
    tag = "Settings"
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivSettingsWrite>,
    Json(payload): Json<UpdateSettingsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state
        .settings_repo
        .update_settings(&app_state.db_pool, payload)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}
