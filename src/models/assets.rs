// src/models/assets.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "asset_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Operational,      // Em operação
    UnderMaintenance, // Em manutenção
    Retired,          // Baixado
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,

    #[schema(example = "Ar-condicionado quarto 204")]
    pub name: String,

    #[schema(example = "CLIMATIZACAO")]
    pub category: String,

    #[schema(example = "2º andar")]
    pub location: Option<String>,

    #[schema(example = "2500.00")]
    pub purchase_cost: Decimal,

    pub status: AssetStatus,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub asset_id: Uuid,

    #[schema(example = "Troca do compressor")]
    pub description: String,

    #[schema(example = "380.00")]
    pub cost: Decimal,

    pub performed_by: Option<Uuid>,

    #[schema(value_type = String, format = Date, example = "2026-08-20")]
    pub performed_at: NaiveDate,

    pub created_at: Option<DateTime<Utc>>,
}

/// Consolidação aditiva dos custos de manutenção de um ativo.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCostSummary {
    pub asset_id: Uuid,

    #[schema(example = "760.00")]
    pub total_cost: Decimal,

    #[schema(example = 2)]
    pub record_count: i64,
}
