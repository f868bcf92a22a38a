// src/models/rbac.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;

// =========================================================================
//  TABELA ÚNICA DE PRIVILÉGIOS
//  Lista única de privilégios do sistema. Era repetida em várias telas do
//  front; aqui é a fonte de verdade usada para popular a tabela no banco
//  e para os guardiões tipados em middleware::rbac.
// =========================================================================

pub struct PrivilegeTemplate {
    pub slug: &'static str,
    pub description: &'static str,
    pub module: &'static str,
}

pub const PRIVILEGE_TEMPLATES: &[PrivilegeTemplate] = &[
    PrivilegeTemplate { slug: "rooms:read", description: "Visualizar quartos", module: "ROOMS" },
    PrivilegeTemplate { slug: "rooms:write", description: "Cadastrar e alterar quartos", module: "ROOMS" },
    PrivilegeTemplate { slug: "guests:read", description: "Visualizar hóspedes", module: "GUESTS" },
    PrivilegeTemplate { slug: "guests:write", description: "Cadastrar e alterar hóspedes", module: "GUESTS" },
    PrivilegeTemplate { slug: "reservations:read", description: "Visualizar reservas", module: "RESERVATIONS" },
    PrivilegeTemplate { slug: "reservations:write", description: "Criar reservas e executar check-in/checkout", module: "RESERVATIONS" },
    PrivilegeTemplate { slug: "assets:read", description: "Visualizar patrimônio", module: "ASSETS" },
    PrivilegeTemplate { slug: "assets:write", description: "Cadastrar ativos e registrar manutenções", module: "ASSETS" },
    PrivilegeTemplate { slug: "hr:write", description: "Administrar cargos e privilégios", module: "HR" },
    PrivilegeTemplate { slug: "settings:write", description: "Alterar configurações do hotel", module: "SETTINGS" },
];

// --- Structs (Mapeando o Postgres) ---

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Recepcionista")]
    pub name: String,

    #[schema(example = "Check-in, checkout e consulta de reservas")]
    pub description: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Privilege {
    pub id: Uuid,

    #[schema(example = "reservations:write")]
    pub slug: String,

    #[schema(example = "Criar reservas e executar check-in/checkout")]
    pub description: String,

    #[schema(example = "RESERVATIONS")]
    pub module: String,
}

// O Payload para criar um cargo
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRolePayload {
    #[schema(example = "Governanta")]
    pub name: String,

    #[schema(example = "Consulta quartos e registra manutenções")]
    pub description: Option<String>,

    #[schema(example = json!(["rooms:read", "assets:write"]))]
    pub privileges: Vec<String>, // Slugs dos privilégios
}

// Resposta completa (Cargo + Lista de Privilégios)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    #[serde(flatten)]
    pub role: Role,

    #[schema(example = json!(["rooms:read", "assets:write"]))]
    pub privileges: Vec<String>,
}
