// src/services/auth.rs

use crate::{
    backend::AuthRepository,
    common::error::AppError,
    models::auth::{LoginResponse, UserType},
};

/// Resultado do login: o que vai para os cookies e o que volta no corpo.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub response: LoginResponse,
}

#[derive(Clone)]
pub struct AuthService {
    repo: AuthRepository,
}

impl AuthService {
    pub fn new(repo: AuthRepository) -> Self {
        Self { repo }
    }

    pub async fn login(&self, email: &str, senha: &str) -> Result<LoginOutcome, AppError> {
        let jwt = self.repo.login(email.trim(), senha).await.map_err(|e| match e {
            // 401 do login é credencial errada, não sessão expirada
            AppError::Backend { status, message } if status.is_client_error() => {
                AppError::FormRejected(message.unwrap_or_else(|| "E-mail ou senha inválidos.".into()))
            }
            other => other,
        })?;

        let user_type = UserType::from_tipo(&jwt.tipo);
        tracing::info!("✅ Login de {} ({})", jwt.email, user_type.as_tipo());

        Ok(LoginOutcome {
            token: jwt.token,
            response: LoginResponse {
                user_type,
                id: jwt.id,
                nome: jwt.nome,
                email: jwt.email,
                redirect: user_type.home_path().to_string(),
            },
        })
    }
}
