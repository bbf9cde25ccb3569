// src/backend/upload_repo.rs

use reqwest::multipart::{Form, Part};

use crate::{
    backend::BackendClient,
    common::error::AppError,
    models::{auth::Session, imovel::UploadResponse},
};

#[derive(Clone)]
pub struct UploadRepository {
    client: BackendClient,
}

impl UploadRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Envia uma foto como multipart (campo `file`) para POST /upload.
    pub async fn upload_foto(
        &self,
        session: &Session,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AppError> {
        let mut part = Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = content_type {
            part = part
                .mime_str(&mime)
                .map_err(|e| anyhow::anyhow!("Content-Type inválido '{}': {}", mime, e))?;
        }

        let form = Form::new().part("file", part);
        self.client.post_multipart(session, "upload", form).await
    }
}
