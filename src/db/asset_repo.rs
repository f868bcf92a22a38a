// src/db/asset_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::assets::{Asset, AssetStatus, MaintenanceRecord},
};

#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  ATIVOS (Patrimônio)
    // =========================================================================

    pub async fn create_asset<'e, E>(
        &self,
        executor: E,
        name: &str,
        category: &str,
        location: Option<&str>,
        purchase_cost: Decimal,
    ) -> Result<Asset, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (name, category, location, purchase_cost)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, category, location, purchase_cost, status, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(location)
        .bind(purchase_cost)
        .fetch_one(executor)
        .await?;

        Ok(asset)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            SELECT id, name, category, location, purchase_cost, status, created_at, updated_at
            FROM assets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    pub async fn list_assets(
        &self,
        status: Option<AssetStatus>,
        category: Option<&str>,
    ) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT id, name, category, location, purchase_cost, status, created_at, updated_at
            FROM assets
            WHERE ($1::asset_status IS NULL OR status = $1)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY name ASC
            "#,
        )
        .bind(status)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: AssetStatus,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE assets SET status = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::AssetNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  MANUTENÇÕES
    // =========================================================================

    pub async fn insert_maintenance<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
        description: &str,
        cost: Decimal,
        performed_by: Option<Uuid>,
        performed_at: NaiveDate,
    ) -> Result<MaintenanceRecord, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (asset_id, description, cost, performed_by, performed_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, asset_id, description, cost, performed_by, performed_at, created_at
            "#,
        )
        .bind(asset_id)
        .bind(description)
        .bind(cost)
        .bind(performed_by)
        .bind(performed_at)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    pub async fn list_maintenance(&self, asset_id: Uuid) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT id, asset_id, description, cost, performed_by, performed_at, created_at
            FROM maintenance_records
            WHERE asset_id = $1
            ORDER BY performed_at DESC, created_at DESC
            "#,
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
