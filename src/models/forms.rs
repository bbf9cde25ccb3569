// src/models/forms.rs
//
// Formulários do painel. Cada um valida com `validator` e sabe se converter
// no corpo que o backend espera.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::{
        error::AppError,
        formatters::{br_date_to_iso, digits_only},
        validators::{
            validate_cpf, validate_data_br, validate_fotos, validate_not_negative,
            validate_positive, validate_telefone,
        },
    },
    models::{
        cliente::{ClienteRequest, ClienteStatus},
        contrato::{ContratoRequest, ContratoStatus},
        imovel::{ImovelRequest, ImovelStatus, ImovelTipo},
        pagamento::{FormaPagamento, PagamentoRequest, PagamentoStatus},
        status::StatusDisplay,
    },
};

const DIA_PAGAMENTO_PADRAO: u8 = 5;

fn default_dia_pagamento() -> u8 {
    DIA_PAGAMENTO_PADRAO
}

fn default_taxa_administracao() -> Decimal {
    Decimal::TEN
}

fn validate_tipo_imovel(tipo: &str) -> Result<(), ValidationError> {
    if parse_tipo(tipo).is_none() {
        let mut err = ValidationError::new("tipo");
        err.message = Some("Tipo deve ser CASA, APARTAMENTO ou COMERCIAL".into());
        return Err(err);
    }
    Ok(())
}

fn parse_tipo(tipo: &str) -> Option<ImovelTipo> {
    [ImovelTipo::Casa, ImovelTipo::Apartamento, ImovelTipo::Comercial]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(tipo.trim()))
}

fn validate_taxa(taxa: &Decimal) -> Result<(), ValidationError> {
    if *taxa < Decimal::ZERO || *taxa > Decimal::ONE_HUNDRED {
        let mut err = ValidationError::new("range");
        err.message = Some("A taxa de administração deve estar entre 0 e 100.".into());
        return Err(err);
    }
    Ok(())
}

// Erro de um único campo, no mesmo formato das validações derivadas
fn field_error(field: &'static str, code: &'static str, message: &'static str) -> AppError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    let mut errors = ValidationErrors::new();
    errors.add(field, err);
    AppError::ValidationError(errors)
}

/// Valida um status vindo do dropdown contra os valores do enum.
pub fn parse_status<T: StatusDisplay>(value: &str) -> Result<T, AppError> {
    T::parse(value).ok_or_else(|| field_error("status", "status", "Status inválido."))
}

// =============================================================================
//  CLIENTE
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteForm {
    #[validate(length(min = 3, message = "O nome deve ter pelo menos 3 caracteres"))]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[validate(email(message = "E-mail inválido"))]
    #[schema(example = "maria@email.com")]
    pub email: String,

    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "123.456.789-01")]
    pub cpf: String,

    #[validate(custom(function = "validate_telefone"))]
    #[schema(example = "(11) 98765-4321")]
    pub telefone: String,

    #[validate(length(min = 5, message = "O endereço deve ter pelo menos 5 caracteres"))]
    pub endereco: String,

    // DD/MM/AAAA (ou só os 8 dígitos)
    #[validate(custom(function = "validate_data_br"))]
    #[schema(example = "20/05/1990")]
    pub data_nascimento: String,

    #[serde(default)]
    pub status: ClienteStatus,
}

impl ClienteForm {
    /// Converte para o corpo do backend. No cadastro o CPF (só dígitos) vira a
    /// senha inicial do inquilino.
    pub fn into_request(self, novo: bool) -> Result<ClienteRequest, AppError> {
        self.validate()?;

        let data_nascimento = br_date_to_iso(&self.data_nascimento).ok_or_else(|| {
            field_error("data_nascimento", "data", "Data inválida. Use o formato DD/MM/AAAA")
        })?;
        let cpf = digits_only(&self.cpf);

        Ok(ClienteRequest {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            senha: novo.then(|| cpf.clone()),
            cpf,
            telefone: digits_only(&self.telefone),
            endereco: self.endereco.trim().to_string(),
            data_nascimento,
            status: self.status,
        })
    }
}

// =============================================================================
//  IMÓVEL
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelForm {
    #[validate(length(min = 3, message = "O nome deve ter pelo menos 3 caracteres"))]
    #[schema(example = "Apartamento Centro")]
    pub nome: String,

    #[validate(length(min = 10, message = "A descrição deve ter pelo menos 10 caracteres"))]
    pub descricao: String,

    #[validate(custom(function = "validate_tipo_imovel"))]
    #[schema(example = "APARTAMENTO")]
    pub tipo: String,

    #[validate(length(min = 5, message = "O endereço deve ter pelo menos 5 caracteres"))]
    pub endereco: String,

    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = f64, example = 1500.0)]
    pub valor_mensal: Decimal,

    #[serde(default)]
    pub status: ImovelStatus,

    #[validate(custom(function = "validate_fotos"))]
    #[serde(default)]
    pub fotos: Vec<String>,

    pub administrador_id: Option<i64>,
}

impl ImovelForm {
    pub fn into_request(self) -> Result<ImovelRequest, AppError> {
        self.validate()?;

        let tipo = parse_tipo(&self.tipo)
            .ok_or_else(|| field_error("tipo", "tipo", "Tipo inválido"))?;

        Ok(ImovelRequest {
            nome: self.nome.trim().to_string(),
            endereco: self.endereco.trim().to_string(),
            descricao: self.descricao.trim().to_string(),
            valor_mensal: self.valor_mensal,
            tipo: tipo.as_str().to_string(),
            status: self.status,
            fotos: self.fotos,
            administrador_id: self.administrador_id,
        })
    }
}

// =============================================================================
//  CONTRATO
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoForm {
    #[validate(required(message = "Selecione um cliente."))]
    pub cliente_id: Option<i64>,

    #[validate(required(message = "Selecione um imóvel."))]
    pub imovel_id: Option<i64>,

    #[validate(required(message = "A data de início é obrigatória."))]
    #[schema(value_type = Option<String>, format = Date, example = "2025-02-01")]
    pub data_inicio: Option<NaiveDate>,

    #[validate(required(message = "A data de término é obrigatória."))]
    #[schema(value_type = Option<String>, format = Date, example = "2026-01-31")]
    pub data_fim: Option<NaiveDate>,

    // Sem valor: usa o aluguel do imóvel escolhido
    #[validate(custom(function = "validate_not_negative"))]
    #[schema(value_type = Option<f64>)]
    pub valor_mensal: Option<Decimal>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    #[schema(value_type = f64)]
    pub valor_deposito: Decimal,

    #[validate(range(min = 1, max = 31, message = "O dia de pagamento deve estar entre 1 e 31."))]
    #[serde(default = "default_dia_pagamento")]
    pub dia_pagamento: u8,

    #[validate(custom(function = "validate_taxa"))]
    #[serde(default = "default_taxa_administracao")]
    #[schema(value_type = f64, example = 10.0)]
    pub taxa_administracao: Decimal,

    #[serde(default)]
    pub status: ContratoStatus,

    pub observacoes: Option<String>,
}

impl ContratoForm {
    // O término precisa vir depois do início
    fn validate_consistency(&self) -> Result<(), ValidationError> {
        if let (Some(inicio), Some(fim)) = (self.data_inicio, self.data_fim) {
            if fim <= inicio {
                let mut err = ValidationError::new("DataFimAntesDoInicio");
                err.message = Some("A data de término deve ser posterior à de início.".into());
                return Err(err);
            }
        }
        Ok(())
    }

    /// Todas as regras do formulário. Nada aqui toca a rede.
    pub fn check(&self) -> Result<(), AppError> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        if let Err(e) = self.validate_consistency() {
            errors.add("data_fim", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }

    /// Monta o corpo do backend. `valor_padrao` é o aluguel do imóvel, usado
    /// quando o formulário não trouxe valor mensal.
    pub fn into_request(
        self,
        status: ContratoStatus,
        valor_padrao: Decimal,
    ) -> Result<ContratoRequest, AppError> {
        self.check()?;

        let (Some(cliente_id), Some(imovel_id), Some(data_inicio), Some(data_fim)) =
            (self.cliente_id, self.imovel_id, self.data_inicio, self.data_fim)
        else {
            return Err(AppError::FormRejected("Formulário de contrato incompleto.".into()));
        };

        Ok(ContratoRequest {
            cliente_id,
            imovel_id,
            data_inicio,
            data_fim,
            valor_mensal: self.valor_mensal.unwrap_or(valor_padrao),
            valor_deposito: self.valor_deposito,
            dia_pagamento: self.dia_pagamento,
            taxa_administracao: self.taxa_administracao,
            status,
            observacoes: self.observacoes.filter(|o| !o.trim().is_empty()),
        })
    }
}

// =============================================================================
//  PAGAMENTO
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoForm {
    #[validate(required(message = "Selecione um contrato."))]
    pub contrato_id: Option<i64>,

    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = f64, example = 1500.0)]
    pub valor: Decimal,

    #[validate(required(message = "A data do pagamento é obrigatória."))]
    #[schema(value_type = Option<String>, format = Date, example = "2025-02-05")]
    pub data_pagamento: Option<NaiveDate>,

    #[serde(default)]
    pub status: PagamentoStatus,

    pub forma_pagamento: Option<FormaPagamento>,

    pub observacoes: Option<String>,
}

impl PagamentoForm {
    pub fn into_request(self) -> Result<PagamentoRequest, AppError> {
        self.validate()?;

        let (Some(contrato_id), Some(data_pagamento)) = (self.contrato_id, self.data_pagamento)
        else {
            return Err(AppError::FormRejected("Formulário de pagamento incompleto.".into()));
        };

        Ok(PagamentoRequest {
            contrato_id,
            valor: self.valor,
            data_pagamento,
            status: self.status,
            forma_pagamento: self.forma_pagamento,
            observacoes: self.observacoes.filter(|o| !o.trim().is_empty()),
        })
    }
}

// =============================================================================
//  AÇÕES PEQUENAS (dropdowns)
// =============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusChange {
    #[schema(example = "PAGO")]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormaPagamentoChange {
    // null limpa a forma de pagamento
    pub forma_pagamento: Option<FormaPagamento>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PagarForm {
    pub metodo: FormaPagamento,
}

impl PagarForm {
    /// Dinheiro não é aceito pelo portal.
    pub fn metodo(&self) -> Result<FormaPagamento, AppError> {
        if FormaPagamento::PORTAL.contains(&self.metodo) {
            Ok(self.metodo)
        } else {
            Err(field_error(
                "metodo",
                "metodo",
                "Escolha PIX, cartão ou boleto para pagar pelo portal.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // Campos com erro, como o painel recebe
    fn campos(err: AppError) -> Vec<String> {
        let details = err.to_api_error("x").details.unwrap();
        let mut keys: Vec<String> = details.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn cliente_form() -> ClienteForm {
        serde_json::from_value(json!({
            "nome": "Maria da Silva",
            "email": "maria@email.com",
            "cpf": "123.456.789-01",
            "telefone": "(11) 98765-4321",
            "endereco": "Rua das Flores, 100",
            "dataNascimento": "20051990"
        }))
        .unwrap()
    }

    #[test]
    fn cliente_form_normalizes_for_backend() {
        let req = cliente_form().into_request(true).unwrap();
        assert_eq!(req.cpf, "12345678901");
        assert_eq!(req.telefone, "11987654321");
        assert_eq!(req.senha.as_deref(), Some("12345678901"));
        assert_eq!(req.data_nascimento, NaiveDate::from_ymd_opt(1990, 5, 20).unwrap());
        assert_eq!(req.status, ClienteStatus::Ativo);
    }

    #[test]
    fn cliente_update_does_not_send_password() {
        let req = cliente_form().into_request(false).unwrap();
        assert_eq!(req.senha, None);
        let body = serde_json::to_value(&req).unwrap();
        assert!(body.get("senha").is_none());
        assert_eq!(body["dataNascimento"], "1990-05-20");
    }

    #[test]
    fn cliente_form_reports_each_bad_field() {
        let mut form = cliente_form();
        form.nome = "Al".into();
        form.cpf = "123".into();
        form.data_nascimento = "31/02/2000".into();

        let err = form.into_request(true).unwrap_err();
        assert_eq!(campos(err), vec!["cpf", "dataNascimento", "nome"]);
    }

    #[test]
    fn contract_form_without_ids_is_rejected() {
        let form: ContratoForm = serde_json::from_value(json!({
            "dataInicio": "2025-02-01",
            "dataFim": "2026-01-31"
        }))
        .unwrap();

        let err = form.check().unwrap_err();
        assert_eq!(campos(err), vec!["clienteId", "imovelId"]);
    }

    #[test]
    fn contract_end_must_follow_start() {
        let form: ContratoForm = serde_json::from_value(json!({
            "clienteId": 1,
            "imovelId": 2,
            "dataInicio": "2025-02-01",
            "dataFim": "2025-02-01"
        }))
        .unwrap();

        let err = form.check().unwrap_err();
        assert_eq!(campos(err), vec!["dataFim"]);
    }

    #[test]
    fn contract_defaults_and_rent_fallback() {
        let form: ContratoForm = serde_json::from_value(json!({
            "clienteId": 1,
            "imovelId": 2,
            "dataInicio": "2025-02-01",
            "dataFim": "2026-01-31"
        }))
        .unwrap();

        let req = form
            .into_request(ContratoStatus::Ativo, Decimal::new(180000, 2))
            .unwrap();
        assert_eq!(req.dia_pagamento, 5);
        assert_eq!(req.taxa_administracao, Decimal::TEN);
        assert_eq!(req.valor_mensal, Decimal::new(1800, 0));
        assert_eq!(req.status, ContratoStatus::Ativo);
    }

    #[test]
    fn imovel_form_rejects_unknown_type_and_bad_photo() {
        let form: ImovelForm = serde_json::from_value(json!({
            "nome": "Sítio",
            "descricao": "Sítio com piscina e pomar",
            "tipo": "RURAL",
            "endereco": "Estrada velha, km 3",
            "valorMensal": 900,
            "fotos": ["ftp://arquivo/foto.jpg"]
        }))
        .unwrap();

        let err = form.into_request().unwrap_err();
        assert_eq!(campos(err), vec!["fotos", "tipo"]);
    }

    #[test]
    fn portal_rejects_cash() {
        let form = PagarForm { metodo: FormaPagamento::Dinheiro };
        assert!(form.metodo().is_err());
        let form = PagarForm { metodo: FormaPagamento::Pix };
        assert_eq!(form.metodo().unwrap(), FormaPagamento::Pix);
    }

    #[test]
    fn status_must_be_known() {
        assert_eq!(parse_status::<PagamentoStatus>("pago").unwrap(), PagamentoStatus::Pago);
        assert!(parse_status::<ClienteStatus>("SUMIDO").is_err());
    }
}
