// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::nullable::null_as_default;

// Cookies da sessão do painel
pub const COOKIE_TOKEN: &str = "auth_token";
pub const COOKIE_USER_TYPE: &str = "user_type";
pub const COOKIE_USER_ID: &str = "user_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Cliente,
}

impl UserType {
    /// O backend manda `tipo: "ADMIN"` para administradores; qualquer outro
    /// valor é tratado como inquilino.
    pub fn from_tipo(tipo: &str) -> Self {
        if tipo.eq_ignore_ascii_case("ADMIN") {
            UserType::Admin
        } else {
            UserType::Cliente
        }
    }

    pub fn as_tipo(&self) -> &'static str {
        match self {
            UserType::Admin => "ADMIN",
            UserType::Cliente => "CLIENTE",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            UserType::Admin => "/admin/dashboard",
            UserType::Cliente => "/cliente/home",
        }
    }
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "admin@alugafacil.com")]
    pub email: String,

    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub senha: String,
}

// Resposta de POST /auth/login no backend
#[derive(Debug, Clone, Deserialize)]
pub struct JwtResponse {
    pub token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

// O que o painel devolve depois do login (o token vai só no cookie)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_type: UserType,
    pub id: Option<i64>,
    pub nome: String,
    pub email: String,
    #[schema(example = "/admin/dashboard")]
    pub redirect: String,
}

/// A sessão de quem está usando o painel.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_type: Option<UserType>,
    pub user_id: Option<i64>,
}
