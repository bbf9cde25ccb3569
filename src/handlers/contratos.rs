// src/handlers/contratos.rs

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
        contrato::{Contrato, ContratoRow},
        forms::{ContratoForm, StatusChange},
        page::{ListPage, ListQuery, MutationResult},
        stats::ContratoStats,
    },
};

// GET /api/admin/contratos
#[utoipa::path(
    get,
    path = "/api/admin/contratos",
    tag = "Contratos",
    params(ListQuery),
    responses(
        (status = 200, description = "Página de contratos com os cards", body = ListPage<ContratoRow, ContratoStats>),
        (status = 401, description = "Sessão expirada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contratos(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .contrato_service
        .list_page(admin.session(), &query)
        .await
        .map_err(|e| e.to_api_error(FETCH_ERROR_MESSAGE))?;

    Ok(Json(page))
}

// GET /api/admin/contratos/{id}
#[utoipa::path(
    get,
    path = "/api/admin/contratos/{id}",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Contrato", body = Contrato),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_contrato(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let contrato = app_state
        .contrato_service
        .find(admin.session(), id)
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar contrato"))?;

    Ok(Json(contrato))
}

// POST /api/admin/contratos
// Sem cliente ou imóvel o formulário é recusado antes de qualquer chamada ao backend.
#[utoipa::path(
    post,
    path = "/api/admin/contratos",
    tag = "Contratos",
    request_body = ContratoForm,
    responses(
        (status = 201, description = "Contrato criado como ATIVO", body = MutationResult<Contrato>),
        (status = 400, description = "Dados inválidos"),
        (status = 422, description = "Imóvel indisponível no período")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_contrato(
    State(app_state): State<AppState>,
    admin: AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<ContratoForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let contrato = app_state
        .contrato_service
        .create(admin.session(), payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao criar contrato"))?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResult::new("Contrato criado com sucesso!", contrato)),
    ))
}

// PUT /api/admin/contratos/{id}
#[utoipa::path(
    put,
    path = "/api/admin/contratos/{id}",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato")),
    request_body = ContratoForm,
    responses(
        (status = 200, description = "Contrato atualizado", body = MutationResult<Contrato>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_contrato(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<ContratoForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let contrato = app_state
        .contrato_service
        .update(admin.session(), id, payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar contrato"))?;

    Ok(Json(MutationResult::new("Contrato atualizado com sucesso!", contrato)))
}

// PATCH /api/admin/contratos/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/contratos/{id}/status",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato"), ListQuery),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Status alterado; listagem recarregada", body = MutationResult<ListPage<ContratoRow, ContratoStats>>),
        (status = 400, description = "Status inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_contrato_status(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusChange>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .contrato_service
        .change_status(admin.session(), id, &payload.status, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao alterar status do contrato"))?;

    Ok(Json(MutationResult::new("Status do contrato alterado com sucesso!", page)))
}

// DELETE /api/admin/contratos/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/contratos/{id}",
    tag = "Contratos",
    params(("id" = i64, Path, description = "ID do contrato"), ListQuery),
    responses(
        (status = 200, description = "Contrato excluído; listagem recarregada", body = MutationResult<ListPage<ContratoRow, ContratoStats>>)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_contrato(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .contrato_service
        .delete(admin.session(), id, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir contrato"))?;

    Ok(Json(MutationResult::new("Contrato excluído com sucesso!", page)))
}
