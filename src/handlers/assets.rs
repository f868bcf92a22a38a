// src/handlers/assets.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::rooms::validate_not_negative,
    middleware::auth::AuthenticatedEmployee,
    middleware::rbac::{PrivAssetsWrite, RequirePrivilege},
    models::assets::{Asset, AssetStatus, MaintenanceCostSummary, MaintenanceRecord},
};

// ---
// Payload: CreateAsset
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetPayload {
    #[validate(length(min = 1, message = "O nome do ativo é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    pub location: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub purchase_cost: Decimal,
}

#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = CreateAssetPayload,
    responses((status = 201, body = Asset)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn create_asset(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivAssetsWrite>,
    Json(payload): Json<CreateAssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let asset = app_state
        .maintenance_service
        .register_asset(
            &app_state.db_pool,
            &payload.name,
            &payload.category,
            payload.location.as_deref(),
            payload.purchase_cost,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

// ---
// Filtros da listagem
// ---
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilters {
    pub status: Option<AssetStatus>,
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/assets",
    responses((status = 200, body = Vec<Asset>)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn list_assets(
    State(app_state): State<AppState>,
    Query(filters): Query<AssetFilters>,
) -> Result<impl IntoResponse, AppError> {
    let assets = app_state
        .asset_repo
        .list_assets(filters.status, filters.category.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(assets)))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    responses((status = 200, body = Asset), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn get_asset(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let asset = app_state
        .asset_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::AssetNotFound)?;

    Ok((StatusCode::OK, Json(asset)))
}

// ---
// Payload: RecordMaintenance
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordMaintenancePayload {
    #[validate(length(min = 1, message = "A descrição do serviço é obrigatória."))]
    pub description: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub cost: Decimal,

    #[schema(value_type = String, format = Date)]
    pub performed_at: NaiveDate,

    // Quando true, o ativo sai de operação junto com o registro
    #[serde(default)]
    pub out_of_service: bool,
}

#[utoipa::path(
    post,
    path = "/api/assets/{id}/maintenance",
    request_body = RecordMaintenancePayload,
    responses((status = 201, body = MaintenanceRecord), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn record_maintenance(
    State(app_state): State<AppState>,
    employee: AuthenticatedEmployee,
    _guard: RequirePrivilege<PrivAssetsWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RecordMaintenancePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let record = app_state
        .maintenance_service
        .record_maintenance(
            &app_state.db_pool,
            id,
            &payload.description,
            payload.cost,
            Some(employee.0.id),
            payload.performed_at,
            payload.out_of_service,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}/maintenance",
    responses((status = 200, body = Vec<MaintenanceRecord>), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn list_maintenance(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .asset_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::AssetNotFound)?;

    let records = app_state.asset_repo.list_maintenance(id).await?;

    Ok((StatusCode::OK, Json(records)))
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}/costs",
    responses((status = 200, body = MaintenanceCostSummary), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn get_cost_summary(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.maintenance_service.cost_summary(id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

#[utoipa::path(
    post,
    path = "/api/assets/{id}/return-to-service",
    responses((status = 200), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Assets"
)]
pub async fn return_to_service(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivAssetsWrite>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .maintenance_service
        .return_to_service(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::OK)
}
