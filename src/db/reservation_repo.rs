// src/db/reservation_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::billing::PaymentMethod,
    models::reservations::{Reservation, ReservationStatus},
};

#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_reservation<'e, E>(
        &self,
        executor: E,
        room_id: Uuid,
        guest_id: Uuid,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        base_total_amount: Decimal,
        advance_paid: Decimal,
    ) -> Result<Reservation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                room_id, guest_id, check_in_date, check_out_date,
                base_total_amount, advance_paid
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            "#,
        )
        .bind(room_id)
        .bind(guest_id)
        .bind(check_in_date)
        .bind(check_out_date)
        .bind(base_total_amount)
        .bind(advance_paid)
        .fetch_one(executor)
        .await?;

        Ok(reservation)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    // Trava a linha da reserva durante a transação de check-in/checkout:
    // duas recepcionistas na mesma reserva serializam aqui.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Reservation>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            FROM reservations
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(reservation)
    }

    // Lista com os filtros da tela (status, hóspede, janela de datas)
    // traduzidos para WHERE.
    pub async fn list_reservations(
        &self,
        status: Option<ReservationStatus>,
        guest_id: Option<Uuid>,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            FROM reservations
            WHERE ($1::reservation_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR guest_id = $2)
              AND ($3::date IS NULL OR check_in_date >= $3)
              AND ($4::date IS NULL OR check_out_date <= $4)
            ORDER BY check_in_date ASC, created_at ASC
            "#,
        )
        .bind(status)
        .bind(guest_id)
        .bind(from_date)
        .bind(to_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }

    // Confirma o check-in: grava os valores calculados e atribui o ator.
    pub async fn finalize_check_in<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        final_total: Decimal,
        remaining_balance: Decimal,
        checked_in_by: Uuid,
    ) -> Result<Reservation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET status            = 'OCCUPIED',
                final_total       = $2,
                remaining_balance = $3,
                checked_in_by     = $4,
                checked_in_at     = now(),
                updated_at        = now()
            WHERE id = $1
            RETURNING
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(final_total)
        .bind(remaining_balance)
        .bind(checked_in_by)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ReservationNotFound)?;

        Ok(reservation)
    }

    // Confirma o checkout: valores finais, ator e encerramento da estadia.
    pub async fn finalize_check_out<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        final_total: Decimal,
        remaining_balance: Decimal,
        checked_out_by: Uuid,
    ) -> Result<Reservation, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET status            = 'COMPLETED',
                final_total       = $2,
                remaining_balance = $3,
                checked_out_by    = $4,
                checked_out_at    = now(),
                updated_at        = now()
            WHERE id = $1
            RETURNING
                id, room_id, guest_id, check_in_date, check_out_date, status,
                base_total_amount, advance_paid, prior_adjustments_total,
                final_total, remaining_balance,
                checked_in_by, checked_out_by, checked_in_at, checked_out_at,
                created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(final_total)
        .bind(remaining_balance)
        .bind(checked_out_by)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::ReservationNotFound)?;

        Ok(reservation)
    }

    // Registra o pagamento recebido na sessão. O valor gravado é o integral,
    // mesmo quando o saldo da reserva foi truncado em zero.
    pub async fn record_payment<'e, E>(
        &self,
        executor: E,
        reservation_id: Uuid,
        amount: Decimal,
        method: PaymentMethod,
        collected_by: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO payments (reservation_id, amount, method, collected_by)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reservation_id)
        .bind(amount)
        .bind(method)
        .bind(collected_by)
        .execute(executor)
        .await?;

        Ok(())
    }
}
