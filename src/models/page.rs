// src/models/page.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::status::StatusBadge;

/// Valor do filtro que significa "sem filtro".
pub const FILTRO_TODOS: &str = "TODOS";

// Query string das páginas de listagem (e das mutações que devolvem a
// listagem atualizada)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Busca sem diferenciar maiúsculas/minúsculas
    pub search: Option<String>,
    /// Status exato ou TODOS
    pub status: Option<String>,
    /// Só na página de pagamentos
    pub forma_pagamento: Option<String>,
    /// Página (começa em 1)
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T, S> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub search: String,
    pub status_filter: String,
    pub status_options: Vec<StatusBadge>,
    pub stats: S,
    // Preenchido quando a busca no backend falhou
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }
}

// Resposta de uma mutação: o toast + os dados recarregados
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MutationResult<T> {
    pub toast: Toast,
    pub data: T,
}

impl<T> MutationResult<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            toast: Toast::success(message),
            data,
        }
    }
}
