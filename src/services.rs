pub mod auth;
pub mod cliente_service;
pub mod contrato_service;
pub mod dashboard_service;
pub mod imovel_service;
pub mod listing;
pub mod pagamento_service;
pub mod stats;
