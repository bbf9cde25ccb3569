// src/services/listing.rs
//
// O padrão comum das páginas de listagem: busca tudo no backend, filtra por
// texto e status aqui e pagina.

use crate::{
    common::{
        error::{AppError, FETCH_ERROR_MESSAGE},
        formatters::digits_only,
    },
    models::{
        page::{ListPage, ListQuery, FILTRO_TODOS},
        status::StatusBadge,
    },
};

/// Itens que aparecem numa listagem com busca e filtro de status.
pub trait Searchable {
    /// Campos onde a busca procura (sem diferenciar maiúsculas).
    fn search_fields(&self) -> Vec<&str>;

    /// Valor do status no fio (ex: "ATIVO").
    fn status_value(&self) -> &str;
}

/// `None` quando o filtro está vazio ou é TODOS.
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(FILTRO_TODOS))
}

pub fn matches_search<E: Searchable>(item: &E, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    let fields = item.search_fields();
    if fields.iter().any(|f| f.to_lowercase().contains(&needle)) {
        return true;
    }

    // "123.456" também acha o CPF guardado como 12345678901
    let only_mask = term
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')' | ' '));
    let digits = digits_only(term);
    only_mask
        && !digits.is_empty()
        && fields.iter().any(|f| digits_only(f).contains(&digits))
}

pub fn matches_status<E: Searchable>(item: &E, status: Option<&str>) -> bool {
    match active_filter(status) {
        Some(wanted) => item.status_value().eq_ignore_ascii_case(wanted),
        None => true,
    }
}

pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Página pedida, limitada ao intervalo [1, total_pages].
pub fn clamp_page(requested: Option<usize>, total_pages: usize) -> usize {
    requested.unwrap_or(1).clamp(1, total_pages.max(1))
}

/// Filtra, pagina e converte para as linhas da tabela. `stats` já deve ter
/// sido calculado sobre a lista completa.
pub fn build_page<'a, E, R, S>(
    items: &'a [E],
    query: &ListQuery,
    per_page: usize,
    stats: S,
    status_options: Vec<StatusBadge>,
    extra_filter: impl Fn(&E) -> bool,
) -> ListPage<R, S>
where
    E: Searchable,
    R: From<&'a E>,
{
    let search = query.search.clone().unwrap_or_default();
    let status = query.status.as_deref();

    let filtered: Vec<&E> = items
        .iter()
        .filter(|item| matches_search(*item, &search))
        .filter(|item| matches_status(*item, status))
        .filter(|item| extra_filter(*item))
        .collect();

    let total_items = filtered.len();
    let total_pages = total_pages(total_items, per_page);
    let page = clamp_page(query.page, total_pages);

    let rows = filtered
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .map(R::from)
        .collect();

    ListPage {
        items: rows,
        page,
        per_page,
        total_items,
        total_pages,
        search,
        status_filter: status_label(status),
        status_options,
        stats,
        error: None,
    }
}

/// Falha na busca: lista vazia com a mensagem fixa. 401 do backend não é
/// engolido, o painel precisa mandar o usuário para o login.
pub fn fetch_failed<R, S: Default>(
    err: AppError,
    query: &ListQuery,
    per_page: usize,
    status_options: Vec<StatusBadge>,
) -> Result<ListPage<R, S>, AppError> {
    if err.is_auth_failure() {
        return Err(err);
    }
    tracing::error!("🔥 Falha ao carregar listagem: {}", err);

    Ok(ListPage {
        items: Vec::new(),
        page: 1,
        per_page,
        total_items: 0,
        total_pages: 1,
        search: query.search.clone().unwrap_or_default(),
        status_filter: status_label(query.status.as_deref()),
        status_options,
        stats: S::default(),
        error: Some(FETCH_ERROR_MESSAGE.to_string()),
    })
}

fn status_label(status: Option<&str>) -> String {
    active_filter(status)
        .map(str::to_uppercase)
        .unwrap_or_else(|| FILTRO_TODOS.to_string())
}
