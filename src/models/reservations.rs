// src/models/reservations.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;

use crate::models::billing::{BillingResult, StayCharges};
use crate::models::rooms::Room;

// Ciclo de vida observado pelas telas: SCHEDULED -> (check-in) -> OCCUPIED
// -> (checkout) -> COMPLETED. O quarto volta para AVAILABLE no checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "reservation_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Scheduled, // Agendada
    Occupied,  // Hóspede no quarto
    Completed, // Finalizada
    Cancelled, // Cancelada
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub guest_id: Uuid,

    #[schema(value_type = String, format = Date, example = "2026-09-01")]
    pub check_in_date: NaiveDate,
    #[schema(value_type = String, format = Date, example = "2026-09-05")]
    pub check_out_date: NaiveDate,

    pub status: ReservationStatus,

    // Valores (snapshot de cobrança)
    #[schema(example = "1400.00")]
    pub base_total_amount: Decimal,
    #[schema(example = "400.00")]
    pub advance_paid: Decimal,
    #[schema(example = "0")]
    pub prior_adjustments_total: Decimal,

    // Preenchidos quando a transação de check-in/checkout é confirmada
    pub final_total: Option<Decimal>,
    pub remaining_balance: Option<Decimal>,

    // Atribuição do ator autenticado (nunca um placeholder fixo)
    pub checked_in_by: Option<Uuid>,
    pub checked_out_by: Option<Uuid>,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub checked_out_at: Option<DateTime<Utc>>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Snapshot de cobrança que alimenta o cálculo da estadia.
    pub fn stay_charges(&self) -> StayCharges {
        StayCharges {
            base_total_amount: self.base_total_amount,
            advance_paid: self.advance_paid,
            prior_adjustments_total: self.prior_adjustments_total,
        }
    }
}

/// Snapshot que as telas de check-in/checkout buscam ao abrir:
/// a reserva, o quarto e as cobranças consolidadas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingSnapshot {
    pub reservation: Reservation,
    pub room: Room,
    pub charges: StayCharges,
}

/// Resposta da confirmação de check-in ou checkout.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutcome {
    pub reservation: Reservation,
    pub billing: BillingResult,

    /// No checkout, sinaliza saldo em aberto (a tela mostra só um aviso;
    /// o checkout nunca é bloqueado por saldo).
    pub outstanding_balance: bool,
}
