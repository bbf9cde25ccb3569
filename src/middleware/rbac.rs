// src/middleware/rbac.rs

use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde_json::json;

use crate::{
    common::error::{ApiError, AppError},
    middleware::auth::AuthenticatedUser,
    models::auth::{Session, UserType},
};

/// O Trait que define qual tipo de usuário uma rota aceita
pub trait RoleDef: Send + Sync + 'static {
    fn role() -> UserType;
}

/// O Extractor (Guardião). Entrega a sessão já verificada.
pub struct RequireRole<T>(pub Session, PhantomData<T>);

impl<T> RequireRole<T> {
    pub fn session(&self) -> &Session {
        &self.0
    }
}

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleDef,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A. Sem sessão: 401 com redirect para o login
        let AuthenticatedUser(session) = AuthenticatedUser::from_request_parts(parts, state)
            .await
            .map_err(|e: AppError| e.to_api_error("Usuário não autenticado"))?;

        // B. Tipo de usuário errado: 403 e manda para a home dele
        let required = T::role();
        match session.user_type {
            Some(user_type) if user_type == required => Ok(RequireRole(session, PhantomData)),
            other => {
                let redirect = other.map(|t| t.home_path()).unwrap_or("/login");
                tracing::warn!("Acesso negado: rota de {:?}, sessão de {:?}", required, other);
                Err(ApiError {
                    status: StatusCode::FORBIDDEN,
                    error: "Você não tem permissão para acessar esta página.".into(),
                    details: Some(json!({ "redirect": redirect })),
                })
            }
        }
    }
}

// ---
// DEFINIÇÃO DOS PAPÉIS (TIPOS)
// ---

pub struct AdminOnly;
impl RoleDef for AdminOnly {
    fn role() -> UserType { UserType::Admin }
}

pub struct ClienteOnly;
impl RoleDef for ClienteOnly {
    fn role() -> UserType { UserType::Cliente }
}

pub type AdminSession = RequireRole<AdminOnly>;
pub type ClienteSession = RequireRole<ClienteOnly>;
