// src/handlers/dashboard.rs

use axum::{extract::State, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::rbac::AdminSession,
    models::dashboard::AdminDashboard,
};

// GET /api/admin/dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Cards de imóveis e pagamentos + atividades recentes", body = AdminDashboard),
        (status = 401, description = "Sessão expirada"),
        (status = 403, description = "Somente administradores")
    ),
    security(("api_jwt" = []))
)]
pub async fn admin_dashboard(
    State(app_state): State<AppState>,
    admin: AdminSession,
) -> Result<Json<AdminDashboard>, ApiError> {
    let dashboard = app_state
        .dashboard_service
        .admin(admin.session())
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar dados do dashboard"))?;

    Ok(Json(dashboard))
}
