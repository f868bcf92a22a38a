// src/services/rbac_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::RbacRepository,
    models::rbac::{Privilege, RoleResponse},
};

#[derive(Clone)]
pub struct RbacService {
    repo: RbacRepository,
    pool: PgPool,
}

impl RbacService {
    pub fn new(repo: RbacRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Cria o cargo e vincula os privilégios numa única transação.
    pub async fn create_role_with_privileges(
        &self,
        name: String,
        description: Option<String>,
        privilege_slugs: Vec<String>,
    ) -> Result<RoleResponse, AppError> {
        let mut tx = self.pool.begin().await?;

        let role = self
            .repo
            .create_role(&mut *tx, &name, description.as_deref())
            .await?;

        let privileges = self
            .repo
            .find_privileges_by_slugs(&mut *tx, &privilege_slugs)
            .await?;

        // Slug desconhecido é erro de entrada, não de banco.
        if privileges.len() != privilege_slugs.len() {
            let mut errors = validator::ValidationErrors::new();
            let mut err = validator::ValidationError::new("unknown_privilege");
            err.message = Some("Um ou mais privilégios não existem.".into());
            errors.add("privileges", err);
            return Err(AppError::ValidationError(errors));
        }

        let privilege_ids: Vec<Uuid> = privileges.iter().map(|p| p.id).collect();
        self.repo
            .assign_privileges(&mut *tx, role.id, &privilege_ids)
            .await?;

        tx.commit().await?;

        let slugs = privileges.into_iter().map(|p| p.slug).collect();
        Ok(RoleResponse { role, privileges: slugs })
    }

    pub async fn assign_role_to_employee(
        &self,
        employee_id: Uuid,
        role_id: Uuid,
    ) -> Result<(), AppError> {
        self.repo
            .assign_role_to_employee(&self.pool, employee_id, role_id)
            .await
    }

    pub async fn list_system_privileges(&self) -> Result<Vec<Privilege>, AppError> {
        self.repo.list_all_privileges().await
    }
}
