// src/models/billing.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums (Mapeando o Postgres) ---

// Enumeração única de formas de pagamento, compartilhada por check-in,
// checkout e registro de pagamentos. Não duplicar em outros módulos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_method", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    DebitCard,
    BankTransfer,
    MobilePayment,
}

// --- Structs ---

/// Snapshot somente-leitura das cobranças de uma reserva, buscado no banco
/// quando a tela de check-in/checkout abre.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StayCharges {
    /// Total originalmente cotado para as diárias (tarifa x noites + serviços já lançados).
    #[schema(example = "15000")]
    pub base_total_amount: Decimal,

    /// Valor já recebido antes da chegada. Invariante: >= 0.
    #[schema(example = "5000")]
    pub advance_paid: Decimal,

    /// Soma de lançamentos extras já refletidos em base_total_amount.
    #[schema(example = "0")]
    pub prior_adjustments_total: Decimal,
}

/// Ajustes digitados pela recepção durante a sessão de check-in ou checkout.
/// Vive apenas durante a sessão; nunca é persistido de forma independente.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingAdjustments {
    #[serde(default)]
    #[schema(example = "0")]
    pub early_arrival_fee: Decimal,

    #[serde(default)]
    #[schema(example = "0")]
    pub late_arrival_fee: Decimal,

    #[serde(default)]
    #[schema(example = "0")]
    pub late_departure_fee: Decimal,

    #[serde(default)]
    #[schema(example = "0")]
    pub damage_fee: Decimal,

    #[serde(default)]
    #[schema(example = "0")]
    pub misc_additional_charges: Decimal,

    /// Valor registrado como pago nesta transação.
    #[serde(default)]
    #[schema(example = "0")]
    pub payment_collected_now: Decimal,

    /// Obrigatório quando payment_collected_now > 0.
    pub payment_method: Option<PaymentMethod>,
}

/// Checklist de verificação do check-in. Apenas identidade e confirmação do
/// hóspede bloqueiam a ação; inspeção do quarto e entrega do cartão são
/// coletados mas não impedem a finalização.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckinChecklist {
    #[serde(default)]
    pub identity_verified: bool,

    #[serde(default)]
    pub guest_confirmed: bool,

    #[serde(default)]
    pub room_inspected: bool,

    #[serde(default)]
    pub key_card_issued: bool,
}

/// Resultado derivado do cálculo de cobrança. A persistência dos valores na
/// reserva é responsabilidade do serviço que finaliza a transação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillingResult {
    #[schema(example = "17000")]
    pub final_total: Decimal,

    /// Nunca negativo: pagamento a maior é truncado em zero.
    #[schema(example = "0")]
    pub remaining_balance: Decimal,
}
