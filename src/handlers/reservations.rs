// src/handlers/reservations.rs

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::rooms::validate_not_negative,
    middleware::auth::AuthenticatedEmployee,
    middleware::rbac::{PrivReservationsWrite, RequirePrivilege},
    models::billing::{BillingAdjustments, CheckinChecklist},
    models::reservations::{BillingSnapshot, Reservation, ReservationStatus, TransactionOutcome},
};

// ---
// Validação dos ajustes de cobrança: os campos numéricos vêm de <input min="0">
// no front, mas o backend rejeita de novo antes do cálculo rodar.
// ---
fn validate_adjustments(adj: &BillingAdjustments) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let fees = [
        ("earlyArrivalFee", adj.early_arrival_fee),
        ("lateArrivalFee", adj.late_arrival_fee),
        ("lateDepartureFee", adj.late_departure_fee),
        ("damageFee", adj.damage_fee),
        ("miscAdditionalCharges", adj.misc_additional_charges),
        ("paymentCollectedNow", adj.payment_collected_now),
    ];

    for (field, value) in fees {
        if value.is_sign_negative() {
            let mut err = ValidationError::new("range");
            err.message = Some("O valor não pode ser negativo.".into());
            errors.add(field, err);
        }
    }

    // Regra: registrou pagamento, precisa dizer como foi pago.
    if adj.payment_collected_now > Decimal::ZERO && adj.payment_method.is_none() {
        let mut err = ValidationError::new("required");
        err.message = Some("Informe a forma de pagamento quando houver valor recebido.".into());
        errors.add("paymentMethod", err);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// ---
// Payload: CreateReservation
// ---
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationPayload {
    pub room_id: Uuid,
    pub guest_id: Uuid,

    #[schema(value_type = String, format = Date)]
    pub check_in_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub check_out_date: NaiveDate,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub advance_paid: Decimal,
}

impl CreateReservationPayload {
    fn validate_consistency(&self) -> Result<(), ValidationError> {
        // Regra: pelo menos uma noite.
        if self.check_out_date <= self.check_in_date {
            let mut err = ValidationError::new("DateRange");
            err.message = Some("A saída deve ser posterior à entrada.".into());
            return Err(err);
        }
        Ok(())
    }
}

#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = CreateReservationPayload,
    responses((status = 201, body = Reservation)),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(app_state): State<AppState>,
    _guard: RequirePrivilege<PrivReservationsWrite>,
    Json(payload): Json<CreateReservationPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    payload.validate_consistency().map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.add("checkOutDate", e);
        AppError::ValidationError(errors)
    })?;

    let reservation = app_state
        .reservation_service
        .create_reservation(
            &app_state.db_pool,
            payload.room_id,
            payload.guest_id,
            payload.check_in_date,
            payload.check_out_date,
            payload.advance_paid,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

// ---
// Filtros da listagem (status, hóspede, janela de datas)
// ---
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFilters {
    pub status: Option<ReservationStatus>,
    pub guest_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[utoipa::path(
    get,
    path = "/api/reservations",
    responses((status = 200, body = Vec<Reservation>)),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(app_state): State<AppState>,
    Query(filters): Query<ReservationFilters>,
) -> Result<impl IntoResponse, AppError> {
    let reservations = app_state
        .reservation_repo
        .list_reservations(filters.status, filters.guest_id, filters.from, filters.to)
        .await?;

    Ok((StatusCode::OK, Json(reservations)))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    responses((status = 200, body = Reservation), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_reservation(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let reservation = app_state
        .reservation_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::ReservationNotFound)?;

    Ok((StatusCode::OK, Json(reservation)))
}

// ---
// Snapshot de cobrança: o GET que a tela de check-in/checkout faz ao abrir
// ---
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/billing",
    responses((status = 200, body = BillingSnapshot), (status = 404)),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_billing_snapshot(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = app_state.reservation_service.billing_snapshot(id).await?;

    Ok((StatusCode::OK, Json(snapshot)))
}

// ---
// Payload: CheckIn (checklist + ajustes da sessão)
// ---
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckInPayload {
    #[serde(default)]
    pub checklist: CheckinChecklist,

    #[serde(default)]
    pub adjustments: BillingAdjustments,
}

#[utoipa::path(
    post,
    path = "/api/reservations/{id}/checkin",
    request_body = CheckInPayload,
    responses(
        (status = 200, body = TransactionOutcome),
        (status = 409, description = "Reserva não está agendada"),
        (status = 422, description = "Checklist incompleto")
    ),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn check_in(
    State(app_state): State<AppState>,
    employee: AuthenticatedEmployee,
    _guard: RequirePrivilege<PrivReservationsWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CheckInPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_adjustments(&payload.adjustments).map_err(AppError::ValidationError)?;

    // O ator autenticado assina o check-in (nada de ID fixo)
    let outcome = app_state
        .reservation_service
        .check_in(
            &app_state.db_pool,
            id,
            payload.checklist,
            payload.adjustments,
            employee.0.id,
        )
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

// ---
// Payload: CheckOut (sem portão; só os ajustes)
// ---
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutPayload {
    #[serde(default)]
    pub adjustments: BillingAdjustments,
}

#[utoipa::path(
    post,
    path = "/api/reservations/{id}/checkout",
    request_body = CheckOutPayload,
    responses(
        (status = 200, body = TransactionOutcome),
        (status = 409, description = "Reserva não está ocupada")
    ),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn check_out(
    State(app_state): State<AppState>,
    employee: AuthenticatedEmployee,
    _guard: RequirePrivilege<PrivReservationsWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CheckOutPayload>,
) -> Result<impl IntoResponse, AppError> {
    validate_adjustments(&payload.adjustments).map_err(AppError::ValidationError)?;

    let outcome = app_state
        .reservation_service
        .check_out(&app_state.db_pool, id, payload.adjustments, employee.0.id)
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

// ---
// Recibo da estadia em PDF
// ---
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/receipt",
    responses(
        (status = 200, content_type = "application/pdf"),
        (status = 409, description = "Reserva ainda sem valores finais")
    ),
    security(("api_jwt" = [])),
    tag = "Reservations"
)]
pub async fn get_receipt(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let pdf_bytes = app_state.receipt_service.generate_stay_receipt(id).await?;

    // Headers para o navegador baixar ou mostrar o PDF
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"recibo_{}.pdf\"", id),
        ),
    ];

    Ok((headers, pdf_bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::billing::PaymentMethod;

    #[test]
    fn ajustes_padrao_passam_na_validacao() {
        assert!(validate_adjustments(&BillingAdjustments::default()).is_ok());
    }

    #[test]
    fn taxa_negativa_e_rejeitada() {
        let adj = BillingAdjustments {
            damage_fee: Decimal::from(-10),
            ..Default::default()
        };

        let errors = validate_adjustments(&adj).unwrap_err();
        assert!(errors.field_errors().contains_key("damageFee"));
    }

    #[test]
    fn pagamento_sem_forma_de_pagamento_e_rejeitado() {
        let adj = BillingAdjustments {
            payment_collected_now: Decimal::from(100),
            payment_method: None,
            ..Default::default()
        };

        let errors = validate_adjustments(&adj).unwrap_err();
        assert!(errors.field_errors().contains_key("paymentMethod"));
    }

    #[test]
    fn pagamento_com_forma_de_pagamento_passa() {
        let adj = BillingAdjustments {
            payment_collected_now: Decimal::from(100),
            payment_method: Some(PaymentMethod::Cash),
            ..Default::default()
        };

        assert!(validate_adjustments(&adj).is_ok());
    }
}
