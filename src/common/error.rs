// src/common/error.rs

use std::collections::HashMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Mensagem fixa exibida quando a listagem não pôde ser carregada.
pub const FETCH_ERROR_MESSAGE: &str = "Erro ao carregar os itens";

const LOGIN_PATH: &str = "/login";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Regra do formulário que não é de campo (ex: imóvel indisponível no período)
    #[error("{0}")]
    FormRejected(String),

    #[error("Sessão inválida ou expirada")]
    Unauthenticated,

    #[error("Acesso negado")]
    Forbidden,

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    // Resposta de erro vinda da API do backend. `message` é o campo
    // "message" (ou "error") do corpo, quando existir.
    #[error("Erro do backend ({status}): {message:?}")]
    Backend {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Falha de comunicação com o backend: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Erros que devem mandar o usuário de volta para o login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::Unauthenticated)
            || matches!(self, AppError::Backend { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }

    /// Converte para a resposta de erro (o "toast"), usando `fallback` quando
    /// o backend não mandou uma mensagem própria.
    pub fn to_api_error(self, fallback: &str) -> ApiError {
        if self.is_auth_failure() {
            return ApiError {
                status: StatusCode::UNAUTHORIZED,
                error: "Sessão expirada. Faça login novamente.".into(),
                details: Some(json!({ "redirect": LOGIN_PATH })),
            };
        }

        match self {
            AppError::ValidationError(errors) => {
                let mut details: HashMap<String, Vec<String>> = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(camel_case(&field), messages);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: "Um ou mais campos são inválidos.".into(),
                    details: Some(json!(details)),
                }
            }
            AppError::FormRejected(message) => ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Forbidden => ApiError::new(
                StatusCode::FORBIDDEN,
                "Você não tem permissão para acessar esta página.",
            ),
            AppError::NotFound(what) => {
                ApiError::new(StatusCode::NOT_FOUND, format!("{what} não encontrado"))
            }
            AppError::Backend { status, message } => {
                tracing::warn!("Backend respondeu {}: {:?}", status, message);
                ApiError::new(status, message.unwrap_or_else(|| fallback.to_string()))
            }
            AppError::HttpError(e) => {
                tracing::error!("🔥 Falha ao falar com o backend: {}", e);
                ApiError::new(StatusCode::BAD_GATEWAY, fallback)
            }
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, fallback)
            }
        }
    }
}

// O painel fala camelCase (dataNascimento, clienteId...)
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error("Ocorreu um erro inesperado.").into_response()
    }
}

// O formato de erro que o painel recebe e mostra como toast.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }
}

// Corpo JSON malformado ou com campo de tipo errado: mesmo toast dos demais erros
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let motivo = rejection.body_text();
        tracing::warn!("Corpo da requisição rejeitado: {}", motivo);
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError {
            status,
            error: "Dados inválidos no corpo da requisição.".into(),
            details: Some(json!({ "motivo": motivo })),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "kind": "error",
            "error": self.error,
        });
        if let Some(details) = self.details {
            body["details"] = details;
        }
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = AppError::Backend {
            status: StatusCode::CONFLICT,
            message: Some("CPF já cadastrado".into()),
        };
        let api = err.to_api_error("Erro ao cadastrar cliente");
        assert_eq!(api.status, StatusCode::CONFLICT);
        assert_eq!(api.error, "CPF já cadastrado");
    }

    #[test]
    fn fallback_used_without_backend_message() {
        let err = AppError::Backend {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        let api = err.to_api_error("Erro ao excluir pagamento");
        assert_eq!(api.error, "Erro ao excluir pagamento");
    }

    #[test]
    fn backend_unauthorized_redirects_to_login() {
        let err = AppError::Backend {
            status: StatusCode::UNAUTHORIZED,
            message: None,
        };
        assert!(err.is_auth_failure());
        let api = err.to_api_error("x");
        assert_eq!(api.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.details.unwrap()["redirect"], "/login");
    }

    #[test]
    fn validation_errors_list_messages_per_field() {
        let mut errors = ValidationErrors::new();
        let mut e = ValidationError::new("length");
        e.message = Some("O nome deve ter pelo menos 3 caracteres".into());
        errors.add("nome", e);

        let api = AppError::ValidationError(errors).to_api_error("x");
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api.details.unwrap()["nome"][0],
            "O nome deve ter pelo menos 3 caracteres"
        );
    }

    #[test]
    fn field_names_are_camel_cased() {
        assert_eq!(camel_case("data_nascimento"), "dataNascimento");
        assert_eq!(camel_case("clienteId"), "clienteId");
        assert_eq!(camel_case("cpf"), "cpf");
    }
}
