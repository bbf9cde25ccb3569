pub mod auth;
pub mod cliente;
pub mod contrato;
pub mod dashboard;
pub mod forms;
pub mod imovel;
pub mod pagamento;
pub mod page;
pub mod stats;
pub mod status;
