// src/handlers/rooms.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{PrivRoomsWrite, RequirePrivilege},
    models::rooms::{Room, RoomStatus},
};

// ---
// Validação Customizada
// ---
pub(crate) fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: CreateRoom
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomPayload {
    #[validate(length(min = 1, message = "O número do quarto é obrigatório."))]
    pub room_number: String,

    pub floor: i32,

    #[validate(length(min = 1, message = "O tipo do quarto é obrigatório."))]
    pub room_type: String,

    #[validate(custom(function = "validate_not_negative"))]
    pub daily_rate: Decimal,

    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = CreateRoomPayload,
    responses((status = 201, body = Room)),
    security(("api_jwt" = [])),
    tag = "Rooms"
)]
pub async fn create_room(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivRoomsWrite>,
    Json(payload): Json<CreateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let room = app_state
        .room_repo
        .create_room(
            &app_state.db_pool,
            &payload.room_number,
            payload.floor,
            &payload.room_type,
            payload.daily_rate,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

// ---
// Filtros da listagem (viram WHERE no repositório)
// ---
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilters {
    pub status: Option<RoomStatus>,
    pub floor: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/rooms",
    responses((status = 200, body = Vec<Room>)),
    security(("api_jwt" = [])),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(app_state): State<AppState>,
    Query(filters): Query<RoomFilters>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = app_state
        .room_repo
        .list_rooms(filters.status, filters.floor)
        .await?;

    Ok((StatusCode::OK, Json(rooms)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    responses((status = 200, body = Room), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Rooms"
)]
pub async fn get_room(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let room = app_state
        .room_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::RoomNotFound)?;

    Ok((StatusCode::OK, Json(room)))
}

// ---
// Payload: UpdateRoom (campos opcionais, só o que mudou)
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomPayload {
    pub room_type: Option<String>,

    // O validator só chama a função quando o campo vem preenchido
    #[validate(custom(function = "validate_not_negative"))]
    pub daily_rate: Option<Decimal>,

    pub description: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    request_body = UpdateRoomPayload,
    responses((status = 200, body = Room), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Rooms"
)]
pub async fn update_room(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivRoomsWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoomPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let room = app_state
        .room_repo
        .update_room(
            &app_state.db_pool,
            id,
            payload.room_type.as_deref(),
            payload.daily_rate,
            payload.description.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(room)))
}

// ---
// Payload: mudança manual de disponibilidade (ex.: tirar para manutenção)
// ---
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetRoomStatusPayload {
    pub status: RoomStatus,
}

#[utoipa::path(
    patch,
    path = "/api/rooms/{id}/status",
    request_body = SetRoomStatusPayload,
    responses((status = 200), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Rooms"
)]
pub async fn set_room_status(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivRoomsWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetRoomStatusPayload>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .room_repo
        .set_status(&app_state.db_pool, id, payload.status)
        .await?;

    Ok(StatusCode::OK)
}
