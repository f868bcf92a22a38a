// src/db/guest_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::guests::Guest};

#[derive(Clone)]
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_guest<'e, E>(
        &self,
        executor: E,
        full_name: &str,
        document_number: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<Guest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (full_name, document_number, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, document_number, email, phone, created_at, updated_at
            "#,
        )
        .bind(full_name)
        .bind(document_number)
        .bind(email)
        .bind(phone)
        .fetch_one(executor)
        .await?;

        Ok(guest)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Guest>, AppError> {
        let guest = sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, full_name, document_number, email, phone, created_at, updated_at
            FROM guests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(guest)
    }

    // Busca por nome (filtro da tela de listagem).
    pub async fn list_guests(&self, name_filter: Option<&str>) -> Result<Vec<Guest>, AppError> {
        let guests = sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, full_name, document_number, email, phone, created_at, updated_at
            FROM guests
            WHERE ($1::text IS NULL OR full_name ILIKE '%' || $1 || '%')
            ORDER BY full_name ASC
            "#,
        )
        .bind(name_filter)
        .fetch_all(&self.pool)
        .await?;

        Ok(guests)
    }
}
