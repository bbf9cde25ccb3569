// src/handlers/pagamentos.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    common::error::{ApiError, FETCH_ERROR_MESSAGE},
    config::AppState,
    middleware::rbac::AdminSession,
    models::{
        dashboard::PagamentosDoContrato,
        forms::{FormaPagamentoChange, PagamentoForm, StatusChange},
        page::{ListPage, ListQuery, MutationResult},
        pagamento::{Pagamento, PagamentoRow},
        stats::PagamentoStats,
    },
};

// GET /api/admin/pagamentos
#[utoipa::path(
    get,
    path = "/api/admin/pagamentos",
    tag = "Pagamentos",
    params(ListQuery),
    responses(
        (status = 200, description = "Página de pagamentos com os cards", body = ListPage<PagamentoRow, PagamentoStats>),
        (status = 401, description = "Sessão expirada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pagamentos(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .pagamento_service
        .list_page(admin.session(), &query)
        .await
        .map_err(|e| e.to_api_error(FETCH_ERROR_MESSAGE))?;

    Ok(Json(page))
}

// GET /api/admin/pagamentos/contrato/{id}
#[utoipa::path(
    get,
    path = "/api/admin/pagamentos/contrato/{id}",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Pagamentos do contrato com os cards", body = PagamentosDoContrato)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_pagamentos_do_contrato(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(contrato_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let resumo = app_state
        .pagamento_service
        .by_contrato(admin.session(), contrato_id)
        .await
        .map_err(|e| e.to_api_error(FETCH_ERROR_MESSAGE))?;

    Ok(Json(resumo))
}

// POST /api/admin/pagamentos
#[utoipa::path(
    post,
    path = "/api/admin/pagamentos",
    tag = "Pagamentos",
    request_body = PagamentoForm,
    responses(
        (status = 201, description = "Pagamento registrado", body = MutationResult<Pagamento>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_pagamento(
    State(app_state): State<AppState>,
    admin: AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<PagamentoForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let pagamento = app_state
        .pagamento_service
        .create(admin.session(), payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao registrar pagamento"))?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResult::new("Pagamento registrado com sucesso!", pagamento)),
    ))
}

// PATCH /api/admin/pagamentos/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/pagamentos/{id}/status",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento"), ListQuery),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Status alterado; listagem recarregada", body = MutationResult<ListPage<PagamentoRow, PagamentoStats>>),
        (status = 400, description = "Status inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_pagamento_status(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusChange>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .pagamento_service
        .change_status(admin.session(), id, &payload.status, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao alterar status do pagamento"))?;

    Ok(Json(MutationResult::new("Status do pagamento alterado com sucesso!", page)))
}

// PATCH /api/admin/pagamentos/{id}/forma-pagamento
#[utoipa::path(
    patch,
    path = "/api/admin/pagamentos/{id}/forma-pagamento",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento"), ListQuery),
    request_body = FormaPagamentoChange,
    responses(
        (status = 200, description = "Forma de pagamento alterada; listagem recarregada", body = MutationResult<ListPage<PagamentoRow, PagamentoStats>>)
    ),
    security(("api_jwt" = []))
)]
pub async fn change_forma_pagamento(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
    WithRejection(Json(payload), _): WithRejection<Json<FormaPagamentoChange>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .pagamento_service
        .change_forma_pagamento(admin.session(), id, payload.forma_pagamento, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao alterar forma de pagamento"))?;

    Ok(Json(MutationResult::new("Forma de pagamento alterada com sucesso!", page)))
}

// DELETE /api/admin/pagamentos/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/pagamentos/{id}",
    tag = "Pagamentos",
    params(("id" = i64, Path, description = "ID do pagamento"), ListQuery),
    responses(
        (status = 200, description = "Pagamento excluído; listagem recarregada", body = MutationResult<ListPage<PagamentoRow, PagamentoStats>>)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_pagamento(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .pagamento_service
        .delete(admin.session(), id, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir pagamento"))?;

    Ok(Json(MutationResult::new("Pagamento excluído com sucesso!", page)))
}
