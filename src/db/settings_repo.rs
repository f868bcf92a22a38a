// src/db/settings_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::settings::{HotelSettings, UpdateSettingsPayload},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // A linha única é criada pela migration; aqui só lemos.
    pub async fn get_settings(&self) -> Result<HotelSettings, AppError> {
        let settings = sqlx::query_as::<_, HotelSettings>(
            "SELECT hotel_name, document_number, address, payment_key FROM hotel_settings WHERE id = 1",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn update_settings<'e, E>(
        &self,
        executor: E,
        payload: UpdateSettingsPayload,
    ) -> Result<HotelSettings, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let settings = sqlx::query_as::<_, HotelSettings>(
            r#"
            UPDATE hotel_settings
            SET hotel_name      = COALESCE($1, hotel_name),
                document_number = COALESCE($2, document_number),
                address         = COALESCE($3, address),
                payment_key     = COALESCE($4, payment_key)
            WHERE id = 1
            RETURNING hotel_name, document_number, address, payment_key
            "#,
        )
        .bind(payload.hotel_name)
        .bind(payload.document_number)
        .bind(payload.address)
        .bind(payload.payment_key)
        .fetch_one(executor)
        .await?;

        Ok(settings)
    }
}
