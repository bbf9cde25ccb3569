// src/config.rs

use std::{env, time::Duration};

use anyhow::Context;

use crate::{
    backend::{
        AuthRepository, BackendClient, ClienteRepository, ContratoRepository, ImovelRepository,
        PagamentoRepository, UploadRepository,
    },
    services::{
        auth::AuthService, cliente_service::ClienteService, contrato_service::ContratoService,
        dashboard_service::DashboardService, imovel_service::ImovelService,
        pagamento_service::PagamentoService,
    },
};

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base da API do backend (com o `/api`)
    pub api_url: String,
    pub bind_addr: String,
    pub page_size: usize,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("ALUGAFACIL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let page_size = match env::var("PAGE_SIZE") {
            Ok(v) => v.parse::<usize>().context("PAGE_SIZE deve ser um número inteiro")?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };
        anyhow::ensure!(page_size > 0, "PAGE_SIZE deve ser maior que zero");

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS deve ser um número inteiro")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            bind_addr,
            page_size,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub backend: BackendClient,

    pub auth_service: AuthService,
    pub cliente_service: ClienteService,
    pub imovel_service: ImovelService,
    pub contrato_service: ContratoService,
    pub pagamento_service: PagamentoService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        Self::from_config(config)
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config.api_url, config.http_timeout)?;
        tracing::info!("✅ Backend configurado em {}", backend.base_url());

        // --- Monta o gráfico de dependências ---
        let clientes_repo = ClienteRepository::new(backend.clone());
        let imoveis_repo = ImovelRepository::new(backend.clone());
        let contratos_repo = ContratoRepository::new(backend.clone());
        let pagamentos_repo = PagamentoRepository::new(backend.clone());
        let upload_repo = UploadRepository::new(backend.clone());
        let auth_repo = AuthRepository::new(backend.clone());

        let page_size = config.page_size;

        let auth_service = AuthService::new(auth_repo);
        let cliente_service = ClienteService::new(clientes_repo, page_size);
        let imovel_service = ImovelService::new(imoveis_repo.clone(), upload_repo, page_size);
        let contrato_service =
            ContratoService::new(contratos_repo.clone(), imoveis_repo.clone(), page_size);
        let pagamento_service = PagamentoService::new(pagamentos_repo.clone(), page_size);
        let dashboard_service =
            DashboardService::new(imoveis_repo, contratos_repo, pagamentos_repo);

        Ok(Self {
            config,
            backend,
            auth_service,
            cliente_service,
            imovel_service,
            contrato_service,
            pagamento_service,
            dashboard_service,
        })
    }
}
