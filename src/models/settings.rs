// src/models/settings.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Perfil do hotel (linha única). Usado no cabeçalho do recibo impresso.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelSettings {
    #[schema(example = "Hotel Jardim Atlântico")]
    pub hotel_name: Option<String>,

    #[schema(example = "12.345.678/0001-90")]
    pub document_number: Option<String>,

    #[schema(example = "Av. Beira-Mar, 1200 - Fortaleza/CE")]
    pub address: Option<String>,

    /// Chave de pagamento impressa como QR Code no recibo.
    pub payment_key: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsPayload {
    pub hotel_name: Option<String>,
    pub document_number: Option<String>,
    pub address: Option<String>,
    pub payment_key: Option<String>,
}
