use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Funcionário não encontrado")]
    EmployeeNotFound,

    #[error("Privilégio '{0}' ausente")]
    MissingPrivilege(String),

    #[error("Quarto não encontrado")]
    RoomNotFound,

    #[error("Hóspede não encontrado")]
    GuestNotFound,

    #[error("Reserva não encontrada")]
    ReservationNotFound,

    #[error("Ativo não encontrado")]
    AssetNotFound,

    // Erro de pré-condição: a reserva não está num estado elegível para a
    // transição pedida (ex.: checkout de reserva já finalizada).
    // Terminal, sem retry.
    #[error("Estado da reserva não permite a operação: {0}")]
    IneligibleReservationState(String),

    // Check-in bloqueado: identidade não verificada ou hóspede não confirmou.
    #[error("Checklist de check-in incompleto")]
    ChecklistIncomplete,

    #[error("Violação de unicidade: {0}")]
    UniqueConstraintViolation(String),

    #[error("Fonte não encontrada: {0}")]
    FontNotFound(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors.iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso.".to_string()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos.".to_string()),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token de autenticação inválido ou ausente.".to_string()),
            AppError::EmployeeNotFound => (StatusCode::NOT_FOUND, "Funcionário não encontrado.".to_string()),
            AppError::MissingPrivilege(slug) => (
                StatusCode::FORBIDDEN,
                format!("Você precisa do privilégio '{}' para realizar esta ação.", slug),
            ),
            AppError::RoomNotFound => (StatusCode::NOT_FOUND, "Quarto não encontrado.".to_string()),
            AppError::GuestNotFound => (StatusCode::NOT_FOUND, "Hóspede não encontrado.".to_string()),
            AppError::ReservationNotFound => (StatusCode::NOT_FOUND, "Reserva não encontrada.".to_string()),
            AppError::AssetNotFound => (StatusCode::NOT_FOUND, "Ativo não encontrado.".to_string()),
            AppError::IneligibleReservationState(msg) => (StatusCode::CONFLICT, msg),
            AppError::ChecklistIncomplete => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "O check-in exige identidade verificada e confirmação do hóspede.".to_string(),
            ),
            AppError::UniqueConstraintViolation(msg) => (StatusCode::CONFLICT, msg),

            // Todos os outros erros (DatabaseError, InternalServerError...) viram 500.
            // O `tracing` loga a mensagem detalhada que o `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.".to_string())
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
