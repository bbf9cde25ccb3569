// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::health,

        // --- Dashboard ---
        handlers::dashboard::admin_dashboard,

        // --- Clientes ---
        handlers::clientes::list_clientes,
        handlers::clientes::get_cliente,
        handlers::clientes::create_cliente,
        handlers::clientes::update_cliente,
        handlers::clientes::change_cliente_status,
        handlers::clientes::delete_cliente,

        // --- Imóveis ---
        handlers::imoveis::list_imoveis,
        handlers::imoveis::list_imoveis_disponiveis,
        handlers::imoveis::get_imovel,
        handlers::imoveis::create_imovel,
        handlers::imoveis::update_imovel,
        handlers::imoveis::change_imovel_status,
        handlers::imoveis::delete_imovel,
        handlers::imoveis::upload_foto,

        // --- Contratos ---
        handlers::contratos::list_contratos,
        handlers::contratos::get_contrato,
        handlers::contratos::create_contrato,
        handlers::contratos::update_contrato,
        handlers::contratos::change_contrato_status,
        handlers::contratos::delete_contrato,

        // --- Pagamentos ---
        handlers::pagamentos::list_pagamentos,
        handlers::pagamentos::list_pagamentos_do_contrato,
        handlers::pagamentos::create_pagamento,
        handlers::pagamentos::change_pagamento_status,
        handlers::pagamentos::change_forma_pagamento,
        handlers::pagamentos::delete_pagamento,

        // --- Portal ---
        handlers::portal::cliente_home,
        handlers::portal::get_contrato,
        handlers::portal::get_pagamento,
        handlers::portal::pagar,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserType,
            models::auth::LoginPayload,
            models::auth::LoginResponse,

            // --- Status / Toast ---
            models::status::BadgeColor,
            models::status::StatusBadge,
            models::page::ToastKind,
            models::page::Toast,

            // --- Entidades ---
            models::cliente::ClienteStatus,
            models::cliente::Cliente,
            models::cliente::ClienteRow,
            models::imovel::ImovelStatus,
            models::imovel::ImovelTipo,
            models::imovel::Imovel,
            models::imovel::ImovelRow,
            models::imovel::UploadResponse,
            models::contrato::ContratoStatus,
            models::contrato::Contrato,
            models::contrato::ContratoRow,
            models::pagamento::PagamentoStatus,
            models::pagamento::FormaPagamento,
            models::pagamento::Pagamento,
            models::pagamento::PagamentoRow,
            models::pagamento::PagamentoAgrupado,

            // --- Cards ---
            models::stats::ClienteStats,
            models::stats::ImovelStats,
            models::stats::ContratoStats,
            models::stats::PagamentoStats,

            // --- Dashboards ---
            models::dashboard::QuantidadeValor,
            models::dashboard::AdminDashboard,
            models::dashboard::PagamentosDoContrato,
            models::dashboard::ClienteDashboard,
            models::dashboard::ContratoDetalhe,
            models::dashboard::PagamentoDetalhe,
            models::dashboard::PagamentoRealizado,

            // --- Formulários ---
            models::forms::ClienteForm,
            models::forms::ImovelForm,
            models::forms::ContratoForm,
            models::forms::PagamentoForm,
            models::forms::StatusChange,
            models::forms::FormaPagamentoChange,
            models::forms::PagarForm,
        )
    ),
    tags(
        (name = "Auth", description = "Login, logout e saúde do serviço"),
        (name = "Dashboard", description = "Painel do administrador"),
        (name = "Clientes", description = "Gestão de Clientes (inquilinos)"),
        (name = "Imóveis", description = "Gestão de Imóveis e Fotos"),
        (name = "Contratos", description = "Contratos de Aluguel"),
        (name = "Pagamentos", description = "Parcelas e Recebimentos"),
        (name = "Portal", description = "Portal do Inquilino")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
