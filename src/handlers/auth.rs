// src/handlers/auth.rs

use axum::{extract::State, Json};
use axum_extra::extract::{
    cookie::{Cookie, CookieJar, SameSite},
    WithRejection,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    models::auth::{
        LoginPayload, LoginResponse, UserType, COOKIE_TOKEN, COOKIE_USER_ID, COOKIE_USER_TYPE,
    },
};

fn session_cookie(name: &'static str, value: String, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(http_only)
        .same_site(SameSite::Lax)
        .build()
}

fn user_type_value(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Admin => "admin",
        UserType::Cliente => "cliente",
    }
}

// Handler de login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login realizado; cookies da sessão definidos", body = LoginResponse),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "E-mail ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(payload), _): WithRejection<Json<LoginPayload>, ApiError>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error("Erro ao fazer login"))?;

    let outcome = app_state
        .auth_service
        .login(&payload.email, &payload.senha)
        .await
        .map_err(|e| e.to_api_error("Erro ao fazer login"))?;

    let response = outcome.response;
    let mut jar = jar
        .add(session_cookie(COOKIE_TOKEN, outcome.token, true))
        .add(session_cookie(
            COOKIE_USER_TYPE,
            user_type_value(response.user_type).to_string(),
            false,
        ));
    if let Some(id) = response.id {
        jar = jar.add(session_cookie(COOKIE_USER_ID, id.to_string(), false));
    }

    Ok((jar, Json(response)))
}

// Handler de logout: só limpa os cookies
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Cookies removidos; `redirect` aponta para o login")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = [COOKIE_TOKEN, COOKIE_USER_TYPE, COOKIE_USER_ID]
        .into_iter()
        .fold(jar, |jar, name| jar.remove(Cookie::build(name).path("/")));

    tracing::info!("Sessão encerrada");
    (jar, Json(json!({ "redirect": "/login" })))
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Auth",
    responses((status = 200, description = "Serviço no ar", body = String))
)]
pub async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_cookie_is_http_only() {
        let cookie = session_cookie(COOKIE_TOKEN, "abc".into(), true);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn user_type_cookie_matches_session_parser() {
        assert_eq!(user_type_value(UserType::Admin), "admin");
        assert_eq!(user_type_value(UserType::Cliente), "cliente");
    }
}
