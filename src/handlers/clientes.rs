// src/handlers/clientes.rs

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
        cliente::{Cliente, ClienteRow},
        forms::{ClienteForm, StatusChange},
        page::{ListPage, ListQuery, MutationResult},
        stats::ClienteStats,
    },
};

// GET /api/admin/clientes
#[utoipa::path(
    get,
    path = "/api/admin/clientes",
    tag = "Clientes",
    params(ListQuery),
    responses(
        (status = 200, description = "Página de clientes com os cards", body = ListPage<ClienteRow, ClienteStats>),
        (status = 401, description = "Sessão expirada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_clientes(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .cliente_service
        .list_page(admin.session(), &query)
        .await
        .map_err(|e| e.to_api_error(FETCH_ERROR_MESSAGE))?;

    Ok(Json(page))
}

// GET /api/admin/clientes/{id}
#[utoipa::path(
    get,
    path = "/api/admin/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    responses(
        (status = 200, description = "Cliente", body = Cliente),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_cliente(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let cliente = app_state
        .cliente_service
        .find(admin.session(), id)
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar cliente"))?;

    Ok(Json(cliente))
}

// POST /api/admin/clientes
#[utoipa::path(
    post,
    path = "/api/admin/clientes",
    tag = "Clientes",
    request_body = ClienteForm,
    responses(
        (status = 201, description = "Cliente cadastrado", body = MutationResult<Cliente>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_cliente(
    State(app_state): State<AppState>,
    admin: AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<ClienteForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let cliente = app_state
        .cliente_service
        .create(admin.session(), payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao cadastrar cliente"))?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResult::new("Cliente cadastrado com sucesso!", cliente)),
    ))
}

// PUT /api/admin/clientes/{id}
#[utoipa::path(
    put,
    path = "/api/admin/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente")),
    request_body = ClienteForm,
    responses(
        (status = 200, description = "Cliente atualizado", body = MutationResult<Cliente>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_cliente(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<ClienteForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let cliente = app_state
        .cliente_service
        .update(admin.session(), id, payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar cliente"))?;

    Ok(Json(MutationResult::new("Cliente atualizado com sucesso!", cliente)))
}

// PATCH /api/admin/clientes/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/clientes/{id}/status",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente"), ListQuery),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Status alterado; listagem recarregada", body = MutationResult<ListPage<ClienteRow, ClienteStats>>),
        (status = 400, description = "Status inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_cliente_status(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusChange>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .cliente_service
        .change_status(admin.session(), id, &payload.status, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao alterar status do cliente"))?;

    Ok(Json(MutationResult::new("Status do cliente alterado com sucesso!", page)))
}

// DELETE /api/admin/clientes/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "ID do cliente"), ListQuery),
    responses(
        (status = 200, description = "Cliente excluído; listagem recarregada", body = MutationResult<ListPage<ClienteRow, ClienteStats>>)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_cliente(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .cliente_service
        .delete(admin.session(), id, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir cliente"))?;

    Ok(Json(MutationResult::new("Cliente excluído com sucesso!", page)))
}
