pub mod client;
pub use client::BackendClient;
pub mod auth_repo;
pub use auth_repo::AuthRepository;
pub mod clientes_repo;
pub use clientes_repo::ClienteRepository;
pub mod imoveis_repo;
pub use imoveis_repo::ImovelRepository;
pub mod contratos_repo;
pub use contratos_repo::ContratoRepository;
pub mod pagamentos_repo;
pub use pagamentos_repo::PagamentoRepository;
pub mod upload_repo;
pub use upload_repo::UploadRepository;
