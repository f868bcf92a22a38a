// src/models/guests.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: Uuid,

    #[schema(example = "João Pereira")]
    pub full_name: String,

    #[schema(example = "123.456.789-00")]
    pub document_number: Option<String>,

    pub email: Option<String>,
    pub phone: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
