// tests/painel_api.rs
//
// Sobe um backend falso (axum numa porta efêmera) e o router do painel
// apontando para ele, e conversa com os dois por HTTP.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use alugafacil_painel::{
    build_router,
    config::{AppConfig, AppState},
};

// --- Backend falso ---

#[derive(Default)]
struct FakeBackend {
    calls: AtomicUsize,
    clientes: Mutex<Vec<Value>>,
    pagos: Mutex<Vec<(i64, String)>>,
    contratos_criados: Mutex<Vec<Value>>,
}

type Fake = Arc<FakeBackend>;

fn cliente_json(id: i64, nome: &str, status: &str) -> Value {
    json!({
        "id": id,
        "nome": nome,
        "email": format!("cliente{id}@email.com"),
        "cpf": format!("{:011}", 12345678900_i64 + id),
        "telefone": "11987654321",
        "endereco": "Rua das Flores, 10",
        "dataNascimento": "1990-05-20",
        "status": status
    })
}

fn token_expirado(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer expirado")
}

async fn count_calls(State(fake): State<Fake>, request: Request, next: Next) -> Response {
    fake.calls.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn fake_login(Json(body): Json<Value>) -> Response {
    match (body["email"].as_str(), body["senha"].as_str()) {
        (Some("admin@alugafacil.com"), Some("segredo")) => Json(json!({
            "token": "tok-admin", "tipo": "ADMIN", "id": 1,
            "nome": "Admin", "email": "admin@alugafacil.com"
        }))
        .into_response(),
        (Some("maria@email.com"), Some("segredo")) => Json(json!({
            "token": "tok-maria", "tipo": "CLIENTE", "id": 7,
            "nome": "Maria", "email": "maria@email.com"
        }))
        .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Credenciais inválidas" })),
        )
            .into_response(),
    }
}

async fn fake_list_clientes(State(fake): State<Fake>, headers: HeaderMap) -> Response {
    if token_expirado(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response();
    }
    let clientes = fake.clientes.lock().unwrap().clone();
    Json(clientes).into_response()
}

async fn fake_create_cliente() -> Response {
    (StatusCode::CONFLICT, Json(json!({ "message": "CPF já cadastrado" }))).into_response()
}

async fn fake_cliente_status(
    State(fake): State<Fake>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    let mut clientes = fake.clientes.lock().unwrap();
    for cliente in clientes.iter_mut() {
        if cliente["id"] == json!(id) {
            cliente["status"] = body["status"].clone();
        }
    }
    StatusCode::OK
}

async fn fake_delete_cliente(State(fake): State<Fake>, Path(id): Path<i64>) -> StatusCode {
    fake.clientes.lock().unwrap().retain(|c| c["id"] != json!(id));
    StatusCode::NO_CONTENT
}

async fn fake_list_imoveis() -> Json<Value> {
    Json(json!([
        { "id": 1, "codigo": "IMV-001", "nome": "Apto Centro", "valorMensal": 1500, "status": "DISPONIVEL",
          "administrador": null, "fotos": null, "descricao": null },
        { "id": 2, "codigo": "IMV-002", "nome": "Casa Jardim", "valorMensal": 2500, "status": "ALUGADO" },
        { "id": 3, "codigo": "IMV-003", "nome": "Sala 12", "valorMensal": 900, "status": "DISPONIVEL" }
    ]))
}

async fn fake_list_pagamentos() -> Json<Value> {
    Json(json!([
        { "id": 1, "valor": 1500, "dataPagamento": "2025-03-05", "status": "PAGO",
          "aluguel": { "id": 3, "imovel": { "nome": "Apto Centro", "codigo": "IMV-001" } } },
        { "id": 2, "valor": 2500, "dataPagamento": "2025-03-10", "status": "PENDENTE",
          "aluguel": { "id": 4, "imovel": { "nome": "Casa Jardim", "codigo": "IMV-002" } } },
        { "id": 3, "valor": 2500, "dataPagamento": "2025-02-10", "status": "ATRASADO",
          "aluguel": { "id": 4, "imovel": { "nome": "Casa Jardim", "codigo": "IMV-002" } } }
    ]))
}

async fn fake_find_imovel(Path(id): Path<i64>) -> Response {
    match id {
        1 => Json(json!({
            "id": 1, "codigo": "IMV-001", "nome": "Apto Centro", "valorMensal": 1500,
            "status": "DISPONIVEL", "administrador": null
        }))
        .into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Imóvel não encontrado" }))).into_response(),
    }
}

// Backend antigo: sem a rota de agrupados
async fn fake_agrupados_ausente() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn fake_upload_quebrado() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "disk full" }))).into_response()
}

async fn fake_find_pagamento(Path(id): Path<i64>) -> Response {
    match id {
        5 => Json(json!({ "id": 5, "contratoId": 3, "valor": 1500, "status": "PENDENTE" })).into_response(),
        6 => Json(json!({ "id": 6, "contratoId": 3, "valor": 1500, "status": "PAGO" })).into_response(),
        // Parcela de um contrato de outro inquilino
        9 => Json(json!({ "id": 9, "contratoId": 99, "valor": 3200, "status": "PENDENTE" })).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Pagamento não encontrado" }))).into_response(),
    }
}

async fn fake_pagar(
    State(fake): State<Fake>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> StatusCode {
    let metodo = body["metodo"].as_str().unwrap_or_default().to_string();
    fake.pagos.lock().unwrap().push((id, metodo));
    StatusCode::OK
}

// Contratos da Maria (id 7): 3 e 4 ativos, 8 encerrado
async fn fake_contratos_do_cliente(Path(cliente_id): Path<i64>) -> Json<Value> {
    if cliente_id != 7 {
        return Json(json!([]));
    }
    Json(json!([
        { "id": 3, "status": "ATIVO", "dataInicio": "2025-02-01", "dataFim": "2026-01-31",
          "valorMensal": 1500, "diaPagamento": 5,
          "imovel": { "id": 1, "nome": "Apto Centro", "codigo": "IMV-001", "administrador": null } },
        { "id": 4, "status": "ATIVO", "dataInicio": "2025-01-10", "dataFim": "2025-12-31",
          "valorMensal": 2500, "diaPagamento": 10,
          "imovel": { "id": 2, "nome": "Casa Jardim", "codigo": null } },
        { "id": 8, "status": "FINALIZADO", "dataInicio": "2023-01-01", "dataFim": "2023-12-31",
          "valorMensal": 900, "imovel": { "id": 3, "nome": "Sala 12", "codigo": "IMV-003" } }
    ]))
}

async fn fake_find_contrato(Path(id): Path<i64>) -> Response {
    match id {
        3 => Json(json!({
            "id": 3, "status": "ATIVO", "dataInicio": "2025-02-01", "dataFim": "2026-01-31",
            "valorMensal": 1500, "valorDeposito": null, "taxaAdministracao": null,
            "pagamentos": null,
            "imovel": { "id": 1, "nome": "Apto Centro", "codigo": "IMV-001", "administrador": null }
        }))
        .into_response(),
        99 => Json(json!({ "id": 99, "status": "ATIVO", "valorMensal": 3200 })).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "message": "Aluguel não encontrado" }))).into_response(),
    }
}

// Imóvel 2 está ocupado em qualquer período
async fn fake_disponibilidade(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    let disponivel = query.get("imovelId").map(String::as_str) != Some("2");
    Json(json!({ "disponivel": disponivel }))
}

async fn fake_create_contrato(State(fake): State<Fake>, Json(body): Json<Value>) -> Response {
    fake.contratos_criados.lock().unwrap().push(body.clone());
    let mut criado = body;
    criado["id"] = json!(50);
    (StatusCode::CREATED, Json(criado)).into_response()
}

fn fake_router(fake: Fake) -> Router {
    Router::new()
        .route("/api/auth/login", post(fake_login))
        .route("/api/clientes", get(fake_list_clientes).post(fake_create_cliente))
        .route("/api/clientes/{id}", delete(fake_delete_cliente))
        .route("/api/clientes/{id}/status", patch(fake_cliente_status))
        .route("/api/imoveis", get(fake_list_imoveis))
        .route("/api/imoveis/{id}", get(fake_find_imovel))
        .route("/api/upload", post(fake_upload_quebrado))
        .route("/api/alugueis", post(fake_create_contrato))
        .route("/api/alugueis/verificar-disponibilidade", get(fake_disponibilidade))
        .route("/api/alugueis/cliente/{id}", get(fake_contratos_do_cliente))
        .route("/api/alugueis/{id}", get(fake_find_contrato))
        .route("/api/pagamentos", get(fake_list_pagamentos))
        .route("/api/pagamentos/agrupados", get(fake_agrupados_ausente))
        .route("/api/pagamentos/{id}", get(fake_find_pagamento))
        .route("/api/pagamentos/{id}/pagar", post(fake_pagar))
        .layer(middleware::from_fn_with_state(fake.clone(), count_calls))
        .with_state(fake)
}

// --- Ambiente de teste ---

struct Harness {
    base: String,
    fake: Fake,
    http: reqwest::Client,
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn harness() -> Harness {
    let fake: Fake = Arc::new(FakeBackend::default());
    {
        let mut clientes = fake.clientes.lock().unwrap();
        for id in 1..=12 {
            let status = if id % 4 == 0 { "INATIVO" } else { "ATIVO" };
            clientes.push(cliente_json(id, &format!("Cliente {id:02}"), status));
        }
        clientes.push(cliente_json(13, "Joana Pereira", "ATIVO"));
    }

    let backend_url = serve(fake_router(fake.clone())).await;
    let state = AppState::from_config(AppConfig::with_api_url(format!("{backend_url}/api"))).unwrap();
    let base = serve(build_router(state)).await;

    Harness {
        base,
        fake,
        http: reqwest::Client::new(),
    }
}

impl Harness {
    fn calls(&self) -> usize {
        self.fake.calls.load(Ordering::SeqCst)
    }

    fn admin(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base))
            .bearer_auth("tok-admin")
            .header("Cookie", "user_type=admin; user_id=1")
    }

    fn cliente(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base))
            .header("Cookie", "auth_token=tok-maria; user_type=cliente; user_id=7")
    }
}

// --- Testes ---

#[tokio::test]
async fn health_is_public() {
    let h = harness().await;
    let res = h.http.get(format!("{}/api/health", h.base)).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn login_sets_session_cookies() {
    let h = harness().await;
    let res = h
        .http
        .post(format!("{}/api/auth/login", h.base))
        .json(&json!({ "email": "admin@alugafacil.com", "senha": "segredo" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let cookies: Vec<String> = res
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("auth_token=tok-admin") && c.contains("HttpOnly")));
    assert!(cookies.iter().any(|c| c.starts_with("user_type=admin")));
    assert!(cookies.iter().any(|c| c.starts_with("user_id=1")));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["userType"], "admin");
    assert_eq!(body["redirect"], "/admin/dashboard");
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn wrong_password_is_a_form_error() {
    let h = harness().await;
    let res = h
        .http
        .post(format!("{}/api/auth/login", h.base))
        .json(&json!({ "email": "admin@alugafacil.com", "senha": "errada" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Credenciais inválidas");
}

#[tokio::test]
async fn admin_routes_require_a_session() {
    let h = harness().await;
    let res = h
        .http
        .get(format!("{}/api/admin/clientes", h.base))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"]["redirect"], "/login");
    assert_eq!(h.calls(), 0);
}

#[tokio::test]
async fn tenant_cannot_open_admin_pages() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::GET, "/api/admin/clientes")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 403);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"]["redirect"], "/cliente/home");
}

#[tokio::test]
async fn expired_backend_token_sends_user_to_login() {
    let h = harness().await;
    let res = h
        .http
        .get(format!("{}/api/admin/clientes", h.base))
        .bearer_auth("expirado")
        .header("Cookie", "user_type=admin")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["details"]["redirect"], "/login");
}

#[tokio::test]
async fn client_list_is_paginated_with_stats_over_everything() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::GET, "/api/admin/clientes?page=2")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["page"], 2);
    assert_eq!(body["totalItems"], 13);
    assert_eq!(body["totalPages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["stats"]["total"], 13);
    assert_eq!(body["stats"]["inativos"], 3);
    assert_eq!(body["items"][0]["cpf"], "123.456.789-11");
}

#[tokio::test]
async fn client_search_and_status_filter_combine() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::GET, "/api/admin/clientes?search=joana&status=ATIVO")
        .send()
        .await
        .unwrap();

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["totalItems"], 1);
    assert_eq!(body["items"][0]["nome"], "Joana Pereira");
    assert_eq!(body["statusFilter"], "ATIVO");

    let res = h
        .admin(reqwest::Method::GET, "/api/admin/clientes?status=INATIVO")
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["totalItems"], 3);
}

#[tokio::test]
async fn status_change_returns_the_refreshed_list() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::PATCH, "/api/admin/clientes/1/status")
        .json(&json!({ "status": "BLOQUEADO" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["toast"]["kind"], "success");
    assert_eq!(body["data"]["stats"]["bloqueados"], 1);
    // PATCH + nova listagem
    assert_eq!(h.calls(), 2);
}

#[tokio::test]
async fn unknown_status_never_reaches_the_backend() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::PATCH, "/api/admin/clientes/1/status")
        .json(&json!({ "status": "SUMIDO" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(h.calls(), 0);
}

#[tokio::test]
async fn backend_message_becomes_the_error_toast() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/clientes")
        .json(&json!({
            "nome": "Maria da Silva",
            "email": "maria@email.com",
            "cpf": "123.456.789-01",
            "telefone": "(11) 98765-4321",
            "endereco": "Rua das Flores, 10",
            "dataNascimento": "20/05/1990"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 409);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "error");
    assert_eq!(body["error"], "CPF já cadastrado");
}

#[tokio::test]
async fn contract_without_client_and_property_is_rejected_locally() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/contratos")
        .json(&json!({ "dataInicio": "2025-02-01", "dataFim": "2026-01-31" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert!(body["details"].get("clienteId").is_some());
    assert!(body["details"].get("imovelId").is_some());
    assert_eq!(h.calls(), 0);
}

#[tokio::test]
async fn admin_dashboard_summarizes_properties_and_payments() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::GET, "/api/admin/dashboard")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["imoveis"]["total"], 3);
    assert_eq!(body["imoveis"]["ativos"], 2);
    assert_eq!(body["pagamentos"]["pendentes"]["quantidade"], 1);
    assert_eq!(body["pagamentos"]["atrasados"]["quantidade"], 1);
    assert_eq!(body["pagamentos"]["recebidos"]["quantidade"], 1);

    let atividades = body["atividadesRecentes"].as_array().unwrap();
    assert_eq!(atividades.len(), 3);
    assert_eq!(atividades[0]["tipo"], "Pagamento Pendente");
    assert_eq!(atividades[0]["data"], "10/03/2025");
}

#[tokio::test]
async fn tenant_pays_an_open_installment() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::POST, "/api/cliente/pagamentos/5/pagar")
        .json(&json!({ "metodo": "PIX" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["redirect"], "/cliente/contratos/3");
    assert_eq!(*h.fake.pagos.lock().unwrap(), vec![(5, "PIX".to_string())]);
}

#[tokio::test]
async fn paid_installment_cannot_be_paid_again() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::POST, "/api/cliente/pagamentos/6/pagar")
        .json(&json!({ "metodo": "BOLETO" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    assert!(h.fake.pagos.lock().unwrap().is_empty());
}

#[tokio::test]
async fn cash_is_not_offered_in_the_portal() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::POST, "/api/cliente/pagamentos/5/pagar")
        .json(&json!({ "metodo": "DINHEIRO" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(h.calls(), 0);
}

#[tokio::test]
async fn installment_of_another_tenant_is_not_found() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::POST, "/api/cliente/pagamentos/9/pagar")
        .json(&json!({ "metodo": "PIX" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    assert!(h.fake.pagos.lock().unwrap().is_empty());

    let res = h
        .cliente(reqwest::Method::GET, "/api/cliente/pagamentos/9")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Pagamento não encontrado");
}

#[tokio::test]
async fn contract_of_another_tenant_is_never_fetched() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::GET, "/api/cliente/contratos/99")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Contrato não encontrado");
    // Só a lista de contratos do inquilino; GET /alugueis/99 não acontece
    assert_eq!(h.calls(), 1);
}

#[tokio::test]
async fn tenant_opens_own_contract_with_null_fields() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::GET, "/api/cliente/contratos/3")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["imovelNome"], "Apto Centro");
    assert!(body["administradorNome"].is_null());
    assert_eq!(body["parcelas"].as_array().unwrap().len(), 0);
    assert_eq!(body["valorDeposito"], "R$ 0,00");
}

#[tokio::test]
async fn tenant_home_groups_payments_locally_on_old_backends() {
    let h = harness().await;
    let res = h
        .cliente(reqwest::Method::GET, "/api/cliente/home")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["alugueis"]["total"], 2);
    assert_eq!(body["alugueis"]["ativos"][0]["duracaoMeses"], 12);
    assert_eq!(body["alugueis"]["ativos"][1]["imovelCodigo"], "");
    assert_eq!(body["pagamentos"]["pendentes"]["quantidade"], 1);
    assert_eq!(body["pagamentos"]["pendentes"]["valor"].as_f64(), Some(2500.0));
    assert_eq!(body["pagamentos"]["atrasados"]["quantidade"], 1);
    // contratos do cliente + agrupados (404) + lista completa
    assert_eq!(h.calls(), 3);
}

#[tokio::test]
async fn contract_for_busy_property_is_refused() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/contratos")
        .json(&json!({
            "clienteId": 7,
            "imovelId": 2,
            "dataInicio": "2025-02-01",
            "dataFim": "2026-01-31",
            "valorMensal": 2500
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 422);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "error");
    assert_eq!(body["error"], "O imóvel não está disponível no período selecionado.");
    assert!(h.fake.contratos_criados.lock().unwrap().is_empty());
}

#[tokio::test]
async fn new_contract_takes_the_rent_from_the_property() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/contratos")
        .json(&json!({
            "clienteId": 7,
            "imovelId": 1,
            "dataInicio": "2025-02-01",
            "dataFim": "2026-01-31"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["toast"]["kind"], "success");

    let criados = h.fake.contratos_criados.lock().unwrap().clone();
    assert_eq!(criados.len(), 1);
    assert_eq!(criados[0]["valorMensal"].as_f64(), Some(1500.0));
    assert_eq!(criados[0]["status"], "ATIVO");
    assert_eq!(criados[0]["diaPagamento"], 5);
    // imóvel + disponibilidade + criação
    assert_eq!(h.calls(), 3);
}

#[tokio::test]
async fn malformed_body_comes_back_as_an_error_toast() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/contratos")
        .json(&json!({ "clienteId": 7, "imovelId": 1, "dataInicio": "01/02/2025" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "error");
    assert_eq!(body["error"], "Dados inválidos no corpo da requisição.");
    assert!(body["details"]["motivo"].as_str().unwrap().contains("dataInicio"));
    assert_eq!(h.calls(), 0);
}

#[tokio::test]
async fn failed_photo_upload_reports_success_false() {
    let h = harness().await;
    let part = reqwest::multipart::Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
        .file_name("fachada.jpg")
        .mime_str("image/jpeg")
        .unwrap();
    let res = h
        .admin(reqwest::Method::POST, "/api/admin/imoveis/fotos")
        .multipart(reqwest::multipart::Form::new().part("file", part))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["url"], "");
    assert_eq!(body["message"], "Erro ao fazer upload da foto");
}

#[tokio::test]
async fn contract_payments_are_filtered_from_the_full_list() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::GET, "/api/admin/pagamentos/contrato/4")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["contratoId"], 4);
    assert_eq!(body["imovelNome"], "Casa Jardim");
    assert_eq!(body["pagamentos"].as_array().unwrap().len(), 2);
    assert!(body["error"].is_null());
}

#[tokio::test]
async fn deleting_a_client_refetches_the_list() {
    let h = harness().await;
    let res = h
        .admin(reqwest::Method::DELETE, "/api/admin/clientes/13")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["toast"]["message"], "Cliente excluído com sucesso!");
    assert_eq!(body["data"]["totalItems"], 12);
    // DELETE + nova listagem
    assert_eq!(h.calls(), 2);
}
