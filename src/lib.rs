// src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod backend;
pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

/// Monta o router completo do painel.
pub fn build_router(app_state: AppState) -> Router {
    // Rotas públicas
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    // Painel do administrador
    let admin_routes = Router::new()
        .route("/dashboard", get(handlers::dashboard::admin_dashboard))
        .route(
            "/clientes",
            get(handlers::clientes::list_clientes).post(handlers::clientes::create_cliente),
        )
        .route(
            "/clientes/{id}",
            get(handlers::clientes::get_cliente)
                .put(handlers::clientes::update_cliente)
                .delete(handlers::clientes::delete_cliente),
        )
        .route("/clientes/{id}/status", patch(handlers::clientes::change_cliente_status))
        .route(
            "/imoveis",
            get(handlers::imoveis::list_imoveis).post(handlers::imoveis::create_imovel),
        )
        .route("/imoveis/disponiveis", get(handlers::imoveis::list_imoveis_disponiveis))
        .route("/imoveis/fotos", post(handlers::imoveis::upload_foto))
        .route(
            "/imoveis/{id}",
            get(handlers::imoveis::get_imovel)
                .put(handlers::imoveis::update_imovel)
                .delete(handlers::imoveis::delete_imovel),
        )
        .route("/imoveis/{id}/status", patch(handlers::imoveis::change_imovel_status))
        .route(
            "/contratos",
            get(handlers::contratos::list_contratos).post(handlers::contratos::create_contrato),
        )
        .route(
            "/contratos/{id}",
            get(handlers::contratos::get_contrato)
                .put(handlers::contratos::update_contrato)
                .delete(handlers::contratos::delete_contrato),
        )
        .route("/contratos/{id}/status", patch(handlers::contratos::change_contrato_status))
        .route(
            "/pagamentos",
            get(handlers::pagamentos::list_pagamentos).post(handlers::pagamentos::create_pagamento),
        )
        .route(
            "/pagamentos/contrato/{id}",
            get(handlers::pagamentos::list_pagamentos_do_contrato),
        )
        .route(
            "/pagamentos/{id}",
            delete(handlers::pagamentos::delete_pagamento),
        )
        .route("/pagamentos/{id}/status", patch(handlers::pagamentos::change_pagamento_status))
        .route(
            "/pagamentos/{id}/forma-pagamento",
            patch(handlers::pagamentos::change_forma_pagamento),
        )
        .layer(axum_middleware::from_fn(auth_guard));

    // Portal do inquilino
    let cliente_routes = Router::new()
        .route("/home", get(handlers::portal::cliente_home))
        .route("/contratos/{id}", get(handlers::portal::get_contrato))
        .route("/pagamentos/{id}", get(handlers::portal::get_pagamento))
        .route("/pagamentos/{id}/pagar", post(handlers::portal::pagar))
        .layer(axum_middleware::from_fn(auth_guard));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(handlers::auth::health))
        .nest("/api/auth", auth_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/cliente", cliente_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
