// src/handlers/guests.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PrivGuestsWrite, RequirePrivilege},
    models::guests::Guest,
};

// ---
// Payload: CreateGuest
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestPayload {
    #[validate(length(min = 1, message = "O nome completo é obrigatório."))]
    pub full_name: String,

    pub document_number: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub phone: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/guests",
    request_body = CreateGuestPayload,
    responses((status = 201, body = Guest)),
    security(("api_jwt" = [])),
    tag = "Guests"
)]
pub async fn create_guest(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivGuestsWrite>,
    Json(payload): Json<CreateGuestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let guest = app_state
        .guest_repo
        .create_guest(
            &app_state.db_pool,
            &payload.full_name,
            payload.document_number.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(guest)))
}

// ---
// Filtro da listagem (busca por nome)
// ---
#[derive(Debug, Deserialize)]
pub struct GuestFilters {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/guests",
    responses((status = 200, body = Vec<Guest>)),
    security(("api_jwt" = [])),
    tag = "Guests"
)]
pub async fn list_guests(
    State(app_state): State<AppState>,
    Query(filters): Query<GuestFilters>,
) -> Result<impl IntoResponse, AppError> {
    let guests = app_state
        .guest_repo
        .list_guests(filters.name.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(guests)))
}

#[utoipa::path(
    get,
    path = "/api/guests/{id}",
    responses((status = 200, body = Guest), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Guests"
)]
pub async fn get_guest(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let guest = app_state
        .guest_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::GuestNotFound)?;

    Ok((StatusCode::OK, Json(guest)))
}
