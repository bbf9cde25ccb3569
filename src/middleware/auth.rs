// src/middleware/auth.rs

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    common::error::AppError,
    models::auth::{Session, UserType, COOKIE_TOKEN, COOKIE_USER_ID, COOKIE_USER_TYPE},
};

/// Monta a sessão a partir do header `Authorization: Bearer` ou, se ele não
/// vier, do cookie `auth_token`. Tipo e id do usuário vêm sempre dos cookies.
pub fn session_from_headers(headers: &HeaderMap) -> Option<Session> {
    let jar = CookieJar::from_headers(headers);

    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let token = bearer.or_else(|| {
        jar.get(COOKIE_TOKEN)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty())
    })?;

    let user_type = jar.get(COOKIE_USER_TYPE).and_then(|c| match c.value() {
        "admin" => Some(UserType::Admin),
        "cliente" => Some(UserType::Cliente),
        _ => None,
    });
    let user_id = jar
        .get(COOKIE_USER_ID)
        .and_then(|c| c.value().parse::<i64>().ok());

    Some(Session {
        token,
        user_type,
        user_id,
    })
}

// Guarda das rotas protegidas: sem token, 401 e volta para o login
pub async fn auth_guard(mut request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let session = session_from_headers(request.headers()).ok_or(AppError::Unauthenticated)?;

    tracing::debug!("Sessão {:?} (id {:?})", session.user_type, session.user_id);
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

// Extrator para obter a sessão diretamente nos handlers
pub struct AuthenticatedUser(pub Session);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Funciona com ou sem o auth_guard na frente
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(AuthenticatedUser(session.clone()));
        }
        session_from_headers(&parts.headers)
            .map(AuthenticatedUser)
            .ok_or(AppError::Unauthenticated)
    }
}
