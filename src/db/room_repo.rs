// src/db/room_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::rooms::{Room, RoomStatus},
};

#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_room<'e, E>(
        &self,
        executor: E,
        room_number: &str,
        floor: i32,
        room_type: &str,
        daily_rate: Decimal,
        description: Option<&str>,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (room_number, floor, room_type, daily_rate, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, room_number, floor, room_type, daily_rate, status, description,
                      created_at, updated_at
            "#,
        )
        .bind(room_number)
        .bind(floor)
        .bind(room_type)
        .bind(daily_rate)
        .bind(description)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Já existe um quarto com esse número.".into(),
                    );
                }
            }
            e.into()
        })?;

        Ok(room)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, room_number, floor, room_type, daily_rate, status, description,
                   created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    // Lista com os filtros da tela (status e andar) traduzidos para WHERE.
    pub async fn list_rooms(
        &self,
        status: Option<RoomStatus>,
        floor: Option<i32>,
    ) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, room_number, floor, room_type, daily_rate, status, description,
                   created_at, updated_at
            FROM rooms
            WHERE ($1::room_status IS NULL OR status = $1)
              AND ($2::int IS NULL OR floor = $2)
            ORDER BY room_number ASC
            "#,
        )
        .bind(status)
        .bind(floor)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    pub async fn update_room<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        room_type: Option<&str>,
        daily_rate: Option<Decimal>,
        description: Option<&str>,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET room_type   = COALESCE($2, room_type),
                daily_rate  = COALESCE($3, daily_rate),
                description = COALESCE($4, description),
                updated_at  = now()
            WHERE id = $1
            RETURNING id, room_number, floor, room_type, daily_rate, status, description,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(room_type)
        .bind(daily_rate)
        .bind(description)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::RoomNotFound)?;

        Ok(room)
    }

    // Transição de disponibilidade física do quarto (efeito colateral do
    // check-in/checkout e da manutenção).
    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: RoomStatus,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE rooms SET status = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::RoomNotFound);
        }
        Ok(())
    }
}
