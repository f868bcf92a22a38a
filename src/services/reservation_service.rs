// src/services/reservation_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{GuestRepository, ReservationRepository, RoomRepository},
    models::billing::{BillingAdjustments, CheckinChecklist},
    models::reservations::{BillingSnapshot, Reservation, ReservationStatus, TransactionOutcome},
    models::rooms::RoomStatus,
    services::billing_service,
};

#[derive(Clone)]
pub struct ReservationService {
    reservation_repo: ReservationRepository,
    room_repo: RoomRepository,
    guest_repo: GuestRepository,
}

impl ReservationService {
    pub fn new(
        reservation_repo: ReservationRepository,
        room_repo: RoomRepository,
        guest_repo: GuestRepository,
    ) -> Self {
        Self { reservation_repo, room_repo, guest_repo }
    }

    // --- CRIAR RESERVA ---
    // O total base é cotado aqui: tarifa do quarto x noites.
    pub async fn create_reservation<'e, E>(
        &self,
        executor: E,
        room_id: Uuid,
        guest_id: Uuid,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        advance_paid: Decimal,
    ) -> Result<Reservation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        self.guest_repo
            .find_by_id(guest_id)
            .await?
            .ok_or(AppError::GuestNotFound)?;

        // O payload já garante check_out_date > check_in_date
        let nights = (check_out_date - check_in_date).num_days();
        let base_total_amount = room.daily_rate * Decimal::from(nights);

        let reservation = self
            .reservation_repo
            .create_reservation(
                executor,
                room_id,
                guest_id,
                check_in_date,
                check_out_date,
                base_total_amount,
                advance_paid,
            )
            .await?;

        tracing::info!(
            "🛎️ Reserva criada: quarto {} de {} a {}",
            room.room_number,
            check_in_date,
            check_out_date
        );

        Ok(reservation)
    }

    // --- SNAPSHOT DE COBRANÇA ---
    // O que a tela de check-in/checkout busca ao abrir.
    pub async fn billing_snapshot(&self, reservation_id: Uuid) -> Result<BillingSnapshot, AppError> {
        let reservation = self
            .reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or(AppError::ReservationNotFound)?;

        let room = self
            .room_repo
            .find_by_id(reservation.room_id)
            .await?
            .ok_or(AppError::RoomNotFound)?;

        let charges = reservation.stay_charges();

        Ok(BillingSnapshot { reservation, room, charges })
    }

    // --- CHECK-IN ---
    // SCHEDULED -> OCCUPIED. O checklist bloqueia; o cálculo nunca falha.
    pub async fn check_in<'e, E>(
        &self,
        executor: E,
        reservation_id: Uuid,
        checklist: CheckinChecklist,
        adjustments: BillingAdjustments,
        actor_id: Uuid,
    ) -> Result<TransactionOutcome, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        // Trava a linha: duas recepcionistas na mesma reserva serializam aqui.
        let reservation = self
            .reservation_repo
            .find_by_id_for_update(&mut *tx, reservation_id)
            .await?
            .ok_or(AppError::ReservationNotFound)?;

        if reservation.status != ReservationStatus::Scheduled {
            return Err(AppError::IneligibleReservationState(
                "Só é possível fazer check-in de uma reserva agendada.".into(),
            ));
        }

        if !billing_service::can_finalize(&checklist) {
            return Err(AppError::ChecklistIncomplete);
        }

        let charges = reservation.stay_charges();
        let billing = billing_service::evaluate(&charges, &adjustments);

        let updated = self
            .reservation_repo
            .finalize_check_in(
                &mut *tx,
                reservation_id,
                billing.final_total,
                billing.remaining_balance,
                actor_id,
            )
            .await?;

        self.room_repo
            .set_status(&mut *tx, reservation.room_id, RoomStatus::Occupied)
            .await?;

        // Pagamento registrado agora (o handler garante a forma de pagamento)
        if adjustments.payment_collected_now > Decimal::ZERO {
            if let Some(method) = adjustments.payment_method {
                self.reservation_repo
                    .record_payment(
                        &mut *tx,
                        reservation_id,
                        adjustments.payment_collected_now,
                        method,
                        actor_id,
                    )
                    .await?;
            }
        }

        tx.commit().await?;

        tracing::info!("✅ Check-in da reserva {} confirmado por {}", reservation_id, actor_id);

        let outstanding_balance = billing.remaining_balance > Decimal::ZERO;
        Ok(TransactionOutcome { reservation: updated, billing, outstanding_balance })
    }

    // --- CHECKOUT ---
    // OCCUPIED -> COMPLETED; o quarto volta para AVAILABLE. Não há portão:
    // saldo em aberto gera apenas um aviso, nunca bloqueia.
    pub async fn check_out<'e, E>(
        &self,
        executor: E,
        reservation_id: Uuid,
        adjustments: BillingAdjustments,
        actor_id: Uuid,
    ) -> Result<TransactionOutcome, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        let reservation = self
            .reservation_repo
            .find_by_id_for_update(&mut *tx, reservation_id)
            .await?
            .ok_or(AppError::ReservationNotFound)?;

        if reservation.status != ReservationStatus::Occupied {
            return Err(AppError::IneligibleReservationState(
                "Só é possível fazer checkout de uma reserva com hóspede no quarto.".into(),
            ));
        }

        let charges = reservation.stay_charges();
        let billing = billing_service::evaluate(&charges, &adjustments);

        let updated = self
            .reservation_repo
            .finalize_check_out(
                &mut *tx,
                reservation_id,
                billing.final_total,
                billing.remaining_balance,
                actor_id,
            )
            .await?;

        self.room_repo
            .set_status(&mut *tx, reservation.room_id, RoomStatus::Available)
            .await?;

        if adjustments.payment_collected_now > Decimal::ZERO {
            if let Some(method) = adjustments.payment_method {
                self.reservation_repo
                    .record_payment(
                        &mut *tx,
                        reservation_id,
                        adjustments.payment_collected_now,
                        method,
                        actor_id,
                    )
                    .await?;
            }
        }

        tx.commit().await?;

        let outstanding_balance = billing.remaining_balance > Decimal::ZERO;
        if outstanding_balance {
            tracing::warn!(
                "⚠️ Checkout da reserva {} com saldo em aberto de {}",
                reservation_id,
                billing.remaining_balance
            );
        } else {
            tracing::info!("✅ Checkout da reserva {} confirmado por {}", reservation_id, actor_id);
        }

        Ok(TransactionOutcome { reservation: updated, billing, outstanding_balance })
    }
}
