// src/backend/client.rs

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{multipart, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{common::error::AppError, models::auth::Session};

/// Cliente HTTP único para a API do backend (base `/api`), compartilhado por
/// todos os repositórios.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("➡️  {} {}", method, url);

        let builder = self.http.request(method, url);
        match session {
            Some(s) => builder.bearer_auth(&s.token),
            None => builder,
        }
    }

    // Qualquer status fora de 2xx vira AppError::Backend, levando junto a
    // mensagem que o backend mandou no corpo.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Backend {
            status: StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
            message: backend_message(&body),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path, Some(session))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_with_query<T, Q>(
        &self,
        session: &Session,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path, Some(session)).query(query);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    pub async fn post<B, T>(&self, session: &Session, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, Some(session)).json(body);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// POST sem token (só o login usa).
    pub async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, None).json(body);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    pub async fn put<B, T>(&self, session: &Session, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path, Some(session)).json(body);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B, T>(&self, session: &Session, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, path, Some(session)).json(body);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Mutações cujo corpo de resposta o painel ignora (ele recarrega a lista
    /// logo depois).
    pub async fn execute<B>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), AppError>
    where
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(method, path, Some(session));
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await?;
        Ok(())
    }

    pub async fn patch_query<Q>(&self, session: &Session, path: &str, query: &Q) -> Result<(), AppError>
    where
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::PATCH, path, Some(session)).query(query);
        self.send(builder).await?;
        Ok(())
    }

    pub async fn delete(&self, session: &Session, path: &str) -> Result<(), AppError> {
        self.send(self.request(Method::DELETE, path, Some(session))).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, AppError> {
        let builder = self.request(Method::POST, path, Some(session)).multipart(form);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }
}

// Extrai "message" (ou "error") do corpo de erro do backend.
fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    })
}
