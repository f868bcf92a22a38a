// src/services/maintenance_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Acquire, Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::AssetRepository,
    models::assets::{Asset, AssetStatus, MaintenanceCostSummary, MaintenanceRecord},
};

/// Soma aditiva dos custos de manutenção (mesmo padrão do cálculo de
/// cobrança da estadia: soma de termos não-negativos, sem arredondamento).
pub fn sum_maintenance_costs(records: &[MaintenanceRecord]) -> Decimal {
    records.iter().map(|r| r.cost).sum()
}

#[derive(Clone)]
pub struct MaintenanceService {
    asset_repo: AssetRepository,
}

impl MaintenanceService {
    pub fn new(asset_repo: AssetRepository) -> Self {
        Self { asset_repo }
    }

    pub async fn register_asset<'e, E>(
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
        self.asset_repo
            .create_asset(executor, name, category, location, purchase_cost)
            .await
    }

    // Registra uma manutenção e, quando o serviço tira o ativo de operação,
    // atualiza o status na mesma transação.
    pub async fn record_maintenance<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
        description: &str,
        cost: Decimal,
        performed_by: Option<Uuid>,
        performed_at: NaiveDate,
        out_of_service: bool,
    ) -> Result<MaintenanceRecord, AppError>
    where
        E: Executor<'e, Database = Postgres> + Acquire<'e, Database = Postgres>,
    {
        let mut tx = executor.begin().await?;

        self.asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;

        let record = self
            .asset_repo
            .insert_maintenance(&mut *tx, asset_id, description, cost, performed_by, performed_at)
            .await?;

        if out_of_service {
            self.asset_repo
                .set_status(&mut *tx, asset_id, AssetStatus::UnderMaintenance)
                .await?;
        }

        tx.commit().await?;

        tracing::info!("🔧 Manutenção registrada para o ativo {} (custo {})", asset_id, cost);

        Ok(record)
    }

    pub async fn return_to_service<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.asset_repo
            .set_status(executor, asset_id, AssetStatus::Operational)
            .await
    }

    // Consolidação de custos por ativo (rollup aditivo).
    pub async fn cost_summary(&self, asset_id: Uuid) -> Result<MaintenanceCostSummary, AppError> {
        self.asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;

        let records = self.asset_repo.list_maintenance(asset_id).await?;

        Ok(MaintenanceCostSummary {
            asset_id,
            total_cost: sum_maintenance_costs(&records),
            record_count: records.len() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(cost: Decimal) -> MaintenanceRecord {
        MaintenanceRecord {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            description: "Reparo".to_string(),
            cost,
            performed_by: None,
            performed_at: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            created_at: None,
        }
    }

    #[test]
    fn rollup_soma_todos_os_custos() {
        let records = vec![
            record(Decimal::new(38000, 2)), // 380.00
            record(Decimal::new(12550, 2)), // 125.50
            record(Decimal::ZERO),
        ];

        assert_eq!(sum_maintenance_costs(&records), Decimal::new(50550, 2));
    }

    #[test]
    fn rollup_de_lista_vazia_e_zero() {
        assert_eq!(sum_maintenance_costs(&[]), Decimal::ZERO);
    }
}
