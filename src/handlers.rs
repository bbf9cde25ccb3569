pub mod auth;
pub mod clientes;
pub mod contratos;
pub mod dashboard;
pub mod imoveis;
pub mod pagamentos;
pub mod portal;
