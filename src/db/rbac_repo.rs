// src/db/rbac_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::models::rbac::{Privilege, Role, PRIVILEGE_TEMPLATES};

#[derive(Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Popula a tabela de privilégios a partir da lista única do sistema.
    // Idempotente: roda a cada inicialização.
    pub async fn sync_privileges(&self) -> Result<(), AppError> {
        for template in PRIVILEGE_TEMPLATES {
            sqlx::query(
                r#"
                INSERT INTO privileges (slug, description, module)
                VALUES ($1, $2, $3)
                ON CONFLICT (slug) DO UPDATE
                SET description = EXCLUDED.description,
                    module = EXCLUDED.module
                "#,
            )
            .bind(template.slug)
            .bind(template.description)
            .bind(template.module)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    // 1. Criar o Cargo
    pub async fn create_role<'e, E>(
        &self,
        executor: E,
        name: &str,
        description: Option<&str>,
    ) -> Result<Role, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(
                        "Já existe um cargo com esse nome.".into(),
                    );
                }
            }
            e.into()
        })?;

        Ok(role)
    }

    // 2. Buscar IDs dos privilégios baseado nos slugs ("reservations:write" -> UUID)
    pub async fn find_privileges_by_slugs<'e, E>(
        &self,
        executor: E,
        slugs: &[String],
    ) -> Result<Vec<Privilege>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // O SQLx lida bem com arrays usando ANY
        let privileges = sqlx::query_as::<_, Privilege>(
            r#"
            SELECT id, slug, description, module
            FROM privileges
            WHERE slug = ANY($1)
            "#,
        )
        .bind(slugs)
        .fetch_all(executor)
        .await?;

        Ok(privileges)
    }

    // 3. Vincular Cargo <-> Privilégio
    pub async fn assign_privileges<'e, E>(
        &self,
        executor: E,
        role_id: Uuid,
        privilege_ids: &[Uuid],
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Inserção em massa usando UNNEST para performance
        sqlx::query(
            r#"
            INSERT INTO role_privileges (role_id, privilege_id)
            SELECT $1, unnest($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(role_id)
        .bind(privilege_ids)
        .execute(executor)
        .await?;

        Ok(())
    }

    // 4. Atribuir um cargo a um funcionário
    pub async fn assign_role_to_employee<'e, E>(
        &self,
        executor: E,
        employee_id: Uuid,
        role_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            r#"
            INSERT INTO employee_roles (employee_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(employee_id)
        .bind(role_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    // 5. Listar todos os privilégios disponíveis (para o frontend montar a tela)
    pub async fn list_all_privileges(&self) -> Result<Vec<Privilege>, AppError> {
        let privileges = sqlx::query_as::<_, Privilege>(
            "SELECT id, slug, description, module FROM privileges ORDER BY module, slug",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(privileges)
    }

    pub async fn employee_has_privilege(
        &self,
        employee_id: Uuid,
        privilege_slug: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM employee_roles er
                JOIN roles r ON er.role_id = r.id
                JOIN role_privileges rp ON r.id = rp.role_id
                JOIN privileges p ON rp.privilege_id = p.id
                WHERE er.employee_id = $1
                  AND p.slug = $2
            )
            "#,
        )
        .bind(employee_id)
        .bind(privilege_slug)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
