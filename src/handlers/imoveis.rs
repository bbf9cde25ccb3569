// src/handlers/imoveis.rs

use axum::{
    extract::{Multipart, Path, Query, State},
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
        forms::{ImovelForm, StatusChange},
        imovel::{Imovel, ImovelRow, UploadResponse},
        page::{ListPage, ListQuery, MutationResult},
        stats::ImovelStats,
    },
    services::imovel_service::FotoUpload,
};

// GET /api/admin/imoveis
#[utoipa::path(
    get,
    path = "/api/admin/imoveis",
    tag = "Imóveis",
    params(ListQuery),
    responses(
        (status = 200, description = "Página de imóveis com os cards", body = ListPage<ImovelRow, ImovelStats>),
        (status = 401, description = "Sessão expirada")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_imoveis(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .imovel_service
        .list_page(admin.session(), &query)
        .await
        .map_err(|e| e.to_api_error(FETCH_ERROR_MESSAGE))?;

    Ok(Json(page))
}

// GET /api/admin/imoveis/disponiveis
#[utoipa::path(
    get,
    path = "/api/admin/imoveis/disponiveis",
    tag = "Imóveis",
    responses(
        (status = 200, description = "Imóveis disponíveis para um contrato novo", body = Vec<Imovel>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_imoveis_disponiveis(
    State(app_state): State<AppState>,
    admin: AdminSession,
) -> Result<impl IntoResponse, ApiError> {
    let imoveis = app_state
        .imovel_service
        .list_disponiveis(admin.session())
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar imóveis disponíveis"))?;

    Ok(Json(imoveis))
}

// GET /api/admin/imoveis/{id}
#[utoipa::path(
    get,
    path = "/api/admin/imoveis/{id}",
    tag = "Imóveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    responses(
        (status = 200, description = "Imóvel", body = Imovel),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_imovel(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let imovel = app_state
        .imovel_service
        .find(admin.session(), id)
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar imóvel"))?;

    Ok(Json(imovel))
}

// POST /api/admin/imoveis
#[utoipa::path(
    post,
    path = "/api/admin/imoveis",
    tag = "Imóveis",
    request_body = ImovelForm,
    responses(
        (status = 201, description = "Imóvel cadastrado", body = MutationResult<Imovel>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_imovel(
    State(app_state): State<AppState>,
    admin: AdminSession,
    WithRejection(Json(payload), _): WithRejection<Json<ImovelForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let imovel = app_state
        .imovel_service
        .create(admin.session(), payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao cadastrar imóvel"))?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResult::new("Imóvel cadastrado com sucesso!", imovel)),
    ))
}

// PUT /api/admin/imoveis/{id}
#[utoipa::path(
    put,
    path = "/api/admin/imoveis/{id}",
    tag = "Imóveis",
    params(("id" = i64, Path, description = "ID do imóvel")),
    request_body = ImovelForm,
    responses(
        (status = 200, description = "Imóvel atualizado", body = MutationResult<Imovel>),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_imovel(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<ImovelForm>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let imovel = app_state
        .imovel_service
        .update(admin.session(), id, payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao atualizar imóvel"))?;

    Ok(Json(MutationResult::new("Imóvel atualizado com sucesso!", imovel)))
}

// PATCH /api/admin/imoveis/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/imoveis/{id}/status",
    tag = "Imóveis",
    params(("id" = i64, Path, description = "ID do imóvel"), ListQuery),
    request_body = StatusChange,
    responses(
        (status = 200, description = "Status alterado; listagem recarregada", body = MutationResult<ListPage<ImovelRow, ImovelStats>>),
        (status = 400, description = "Status inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn change_imovel_status(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
    WithRejection(Json(payload), _): WithRejection<Json<StatusChange>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .imovel_service
        .change_status(admin.session(), id, &payload.status, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao alterar status do imóvel"))?;

    Ok(Json(MutationResult::new("Status do imóvel alterado com sucesso!", page)))
}

// DELETE /api/admin/imoveis/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/imoveis/{id}",
    tag = "Imóveis",
    params(("id" = i64, Path, description = "ID do imóvel"), ListQuery),
    responses(
        (status = 200, description = "Imóvel excluído; listagem recarregada", body = MutationResult<ListPage<ImovelRow, ImovelStats>>)
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_imovel(
    State(app_state): State<AppState>,
    admin: AdminSession,
    Path(id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = app_state
        .imovel_service
        .delete(admin.session(), id, &query)
        .await
        .map_err(|e| e.to_api_error("Erro ao excluir imóvel"))?;

    Ok(Json(MutationResult::new("Imóvel excluído com sucesso!", page)))
}

// POST /api/admin/imoveis/fotos (multipart, campo "file")
#[utoipa::path(
    post,
    path = "/api/admin/imoveis/fotos",
    tag = "Imóveis",
    request_body(content_type = "multipart/form-data", description = "Campo `file` com a imagem"),
    responses(
        (status = 200, description = "Resultado do upload", body = UploadResponse),
        (status = 400, description = "Nenhum arquivo enviado")
    ),
    security(("api_jwt" = []))
)]
pub async fn upload_foto(
    State(app_state): State<AppState>,
    admin: AdminSession,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut foto: Option<FotoUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, format!("Upload inválido: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("foto").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(StatusCode::BAD_REQUEST, format!("Upload inválido: {e}")))?;

        foto = Some(FotoUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let foto = foto.ok_or_else(|| ApiError::new(StatusCode::BAD_REQUEST, "Nenhum arquivo enviado."))?;

    let resposta = app_state
        .imovel_service
        .upload_foto(admin.session(), foto)
        .await
        .map_err(|e| e.to_api_error("Erro ao fazer upload da foto"))?;

    Ok(Json(resposta))
}
