// src/config.rs

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        AssetRepository, EmployeeRepository, GuestRepository, RbacRepository,
        ReservationRepository, RoomRepository, SettingsRepository,
    },
    services::{
        AuthService, MaintenanceService, RbacService, ReceiptService, ReservationService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    // Repositórios usados direto pelos handlers de leitura
    pub room_repo: RoomRepository,
    pub guest_repo: GuestRepository,
    pub reservation_repo: ReservationRepository,
    pub asset_repo: AssetRepository,
    pub rbac_repo: RbacRepository,
    pub settings_repo: SettingsRepository,

    // Serviços (regras de negócio)
    pub auth_service: AuthService,
    pub reservation_service: ReservationService,
    pub maintenance_service: MaintenanceService,
    pub rbac_service: RbacService,
    pub receipt_service: ReceiptService,
}

impl AppState {
    // Função para carregar as configurações e montar o grafo de dependências
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;

        let db_pool = match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
                pool
            }
            Err(e) => {
                tracing::error!("🔥 Falha ao conectar ao banco de dados: {:?}", e);
                std::process::exit(1);
            }
        };

        // Repositórios
        let employee_repo = EmployeeRepository::new(db_pool.clone());
        let room_repo = RoomRepository::new(db_pool.clone());
        let guest_repo = GuestRepository::new(db_pool.clone());
        let reservation_repo = ReservationRepository::new(db_pool.clone());
        let asset_repo = AssetRepository::new(db_pool.clone());
        let rbac_repo = RbacRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        // Serviços
        let auth_service =
            AuthService::new(employee_repo.clone(), jwt_secret, db_pool.clone());
        let reservation_service = ReservationService::new(
            reservation_repo.clone(),
            room_repo.clone(),
            guest_repo.clone(),
        );
        let maintenance_service = MaintenanceService::new(asset_repo.clone());
        let rbac_service = RbacService::new(rbac_repo.clone(), db_pool.clone());
        let receipt_service = ReceiptService::new(
            reservation_repo.clone(),
            room_repo.clone(),
            guest_repo.clone(),
            settings_repo.clone(),
        );

        Ok(Self {
            db_pool,
            room_repo,
            guest_repo,
            reservation_repo,
            asset_repo,
            rbac_repo,
            settings_repo,
            auth_service,
            reservation_service,
            maintenance_service,
            rbac_service,
            receipt_service,
        })
    }
}
