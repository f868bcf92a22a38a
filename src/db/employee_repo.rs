// src/db/employee_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::Employee};

// O repositório de funcionários, responsável pelas interações com a tabela 'employees'
#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um funcionário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let maybe_employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, email, password_hash, full_name, is_active, created_at, updated_at
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_employee)
    }

    // Busca um funcionário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, AppError> {
        let maybe_employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, email, password_hash, full_name, is_active, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maybe_employee)
    }

    // Cria um novo funcionário, com tratamento específico para e-mail duplicado
    pub async fn create_employee<'e, E>(
        &self,
        executor: E,
        email: &str,
        password_hash: &str,
        full_name: &str,
    ) -> Result<Employee, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (email, password_hash, full_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, full_name, is_active, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::EmailAlreadyExists;
                }
            }
            e.into()
        })?;

        Ok(employee)
    }
}
