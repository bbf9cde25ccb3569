// src/backend/auth_repo.rs

use serde::Serialize;

use crate::{backend::BackendClient, common::error::AppError, models::auth::JwtResponse};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    // A API espera 'senha' e não 'password'
    senha: &'a str,
}

#[derive(Clone)]
pub struct AuthRepository {
    client: BackendClient,
}

impl AuthRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, email: &str, senha: &str) -> Result<JwtResponse, AppError> {
        self.client
            .post_anonymous("auth/login", &LoginRequest { email, senha })
            .await
    }
}
