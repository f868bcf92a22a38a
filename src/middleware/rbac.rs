// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{common::error::AppError, config::AppState, models::auth::Employee};

/// 1. O Trait que define o que é um Privilégio
pub trait PrivilegeDef: Send + Sync + 'static {
    fn slug() -> &'static str;
}

/// 2. O Extractor (Guardião)
pub struct RequirePrivilege<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts

impl<T, S> FromRequestParts<S> for RequirePrivilege<T>
where
    T: PrivilegeDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A. Extrai o funcionário (injetado pelo auth_guard)
        let employee = parts
            .extensions
            .get::<Employee>()
            .ok_or(AppError::InvalidToken)?;

        // B. Pega o slug do privilégio
        let required = T::slug();

        // C. Verifica no Banco
        let has_privilege = app_state
            .rbac_repo
            .employee_has_privilege(employee.id, required)
            .await?;

        if !has_privilege {
            return Err(AppError::MissingPrivilege(required.to_string()));
        }

        Ok(RequirePrivilege(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS PRIVILÉGIOS (TIPOS)
// Os slugs vêm da tabela única em models::rbac::PRIVILEGE_TEMPLATES.
// ---

pub struct PrivRoomsWrite;
impl PrivilegeDef for PrivRoomsWrite {
    fn slug() -> &'static str { "rooms:write" }
}

pub struct PrivGuestsWrite;
impl PrivilegeDef for PrivGuestsWrite {
    fn slug() -> &'static str { "guests:write" }
}

pub struct PrivReservationsWrite;
impl PrivilegeDef for PrivReservationsWrite {
    fn slug() -> &'static str { "reservations:write" }
}

pub struct PrivAssetsWrite;
impl PrivilegeDef for PrivAssetsWrite {
    fn slug() -> &'static str { "assets:write" }
}

pub struct PrivHrWrite;
impl PrivilegeDef for PrivHrWrite {
    fn slug() -> &'static str { "hr:write" }
}

pub struct PrivSettingsWrite;
impl PrivilegeDef for PrivSettingsWrite {
    fn slug() -> &'static str { "settings:write" }
}
