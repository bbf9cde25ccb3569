// src/services/imovel_service.rs

use crate::{
    backend::{ImovelRepository, UploadRepository},
    common::error::AppError,
    models::{
        auth::Session,
        forms::{parse_status, ImovelForm},
        imovel::{Imovel, ImovelRow, ImovelStatus, UploadResponse},
        page::{ListPage, ListQuery},
        stats::ImovelStats,
        status::StatusDisplay,
    },
    services::{
        listing::{self, Searchable},
        stats::calculate_imovel_stats,
    },
};

pub type ImoveisPage = ListPage<ImovelRow, ImovelStats>;

const UPLOAD_ERROR_MESSAGE: &str = "Erro ao fazer upload da foto";

impl Searchable for Imovel {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nome.as_str(),
            self.codigo.as_str(),
            self.endereco.as_str(),
            self.tipo.as_str(),
        ]
    }

    fn status_value(&self) -> &str {
        self.status.as_str()
    }
}

/// Uma foto recebida pelo painel, pronta para ir ao backend.
pub struct FotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct ImovelService {
    repo: ImovelRepository,
    upload_repo: UploadRepository,
    page_size: usize,
}

impl ImovelService {
    pub fn new(repo: ImovelRepository, upload_repo: UploadRepository, page_size: usize) -> Self {
        Self {
            repo,
            upload_repo,
            page_size,
        }
    }

    pub async fn list_page(
        &self,
        session: &Session,
        query: &ListQuery,
    ) -> Result<ImoveisPage, AppError> {
        match self.repo.list(session).await {
            Ok(imoveis) => Ok(listing::build_page(
                &imoveis,
                query,
                self.page_size,
                calculate_imovel_stats(&imoveis),
                ImovelStatus::options(),
                |_| true,
            )),
            Err(e) => listing::fetch_failed(e, query, self.page_size, ImovelStatus::options()),
        }
    }

    /// Imóveis que podem entrar num contrato novo.
    pub async fn list_disponiveis(&self, session: &Session) -> Result<Vec<Imovel>, AppError> {
        self.repo.list_by_status(session, ImovelStatus::Disponivel).await
    }

    pub async fn find(&self, session: &Session, id: i64) -> Result<Imovel, AppError> {
        self.repo.find_by_id(session, id).await
    }

    pub async fn create(&self, session: &Session, form: ImovelForm) -> Result<Imovel, AppError> {
        let request = form.into_request()?;
        let imovel = self.repo.create(session, &request).await?;
        tracing::info!("✅ Imóvel {} cadastrado", imovel.codigo);
        Ok(imovel)
    }

    pub async fn update(&self, session: &Session, id: i64, form: ImovelForm) -> Result<Imovel, AppError> {
        let request = form.into_request()?;
        self.repo.update(session, id, &request).await
    }

    pub async fn change_status(
        &self,
        session: &Session,
        id: i64,
        status: &str,
        query: &ListQuery,
    ) -> Result<ImoveisPage, AppError> {
        let status = parse_status::<ImovelStatus>(status)?;
        self.repo.update_status(session, id, status).await?;
        self.list_page(session, query).await
    }

    pub async fn delete(
        &self,
        session: &Session,
        id: i64,
        query: &ListQuery,
    ) -> Result<ImoveisPage, AppError> {
        self.repo.delete(session, id).await?;
        tracing::info!("Imóvel {} excluído", id);
        self.list_page(session, query).await
    }

    /// Envia uma foto. Falha no upload não é erro da requisição: volta
    /// `success: false` com a mensagem para o formulário mostrar.
    pub async fn upload_foto(
        &self,
        session: &Session,
        foto: FotoUpload,
    ) -> Result<UploadResponse, AppError> {
        let result = self
            .upload_repo
            .upload_foto(session, foto.file_name, foto.content_type, foto.bytes)
            .await;

        match result {
            Ok(resposta) if resposta.success && !resposta.url.is_empty() => Ok(resposta),
            Ok(resposta) => Ok(UploadResponse {
                url: String::new(),
                success: false,
                message: resposta.message.or_else(|| Some(UPLOAD_ERROR_MESSAGE.to_string())),
            }),
            Err(e) if e.is_auth_failure() => Err(e),
            Err(e) => {
                tracing::error!("🔥 Upload de foto falhou: {}", e);
                Ok(UploadResponse {
                    url: String::new(),
                    success: false,
                    message: Some(UPLOAD_ERROR_MESSAGE.to_string()),
                })
            }
        }
    }
}
