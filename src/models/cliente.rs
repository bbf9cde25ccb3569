// src/models/cliente.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::formatters::{format_cpf, format_optional_date, format_telefone};
use crate::common::nullable::null_as_default;
use crate::models::status::{BadgeColor, StatusBadge, StatusDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClienteStatus {
    #[default]
    Ativo,
    Inativo,
    Bloqueado,
}

impl StatusDisplay for ClienteStatus {
    const ALL: &'static [Self] = &[Self::Ativo, Self::Inativo, Self::Bloqueado];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ativo => "ATIVO",
            Self::Inativo => "INATIVO",
            Self::Bloqueado => "BLOQUEADO",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Inativo => "Inativo",
            Self::Bloqueado => "Bloqueado",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            Self::Ativo => BadgeColor::Success,
            Self::Inativo => BadgeColor::Default,
            Self::Bloqueado => BadgeColor::Danger,
        }
    }
}

// O inquilino, como o backend devolve em GET /clientes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 42)]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Maria da Silva")]
    pub nome: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "maria@email.com")]
    pub email: String,

    // Sempre só dígitos no backend
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "12345678901")]
    pub cpf: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "11987654321")]
    pub telefone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub endereco: String,

    #[schema(value_type = Option<String>, format = Date, example = "1990-05-20")]
    pub data_nascimento: Option<NaiveDate>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ClienteStatus,
}

// Resumo do cliente embutido em contratos e pagamentos
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRef {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpf: String,
}

// Corpo de POST /clientes e PUT /clientes/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub cpf: String,
    pub telefone: String,
    pub endereco: String,
    pub data_nascimento: NaiveDate,
    pub status: ClienteStatus,
}

// Linha da tabela de clientes, já formatada
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRow {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[schema(example = "123.456.789-01")]
    pub cpf: String,
    #[schema(example = "(11) 98765-4321")]
    pub telefone: String,
    pub endereco: String,
    #[schema(example = "20/05/1990")]
    pub data_nascimento: String,
    pub status: StatusBadge,
}

impl From<&Cliente> for ClienteRow {
    fn from(c: &Cliente) -> Self {
        Self {
            id: c.id,
            nome: c.nome.clone(),
            email: c.email.clone(),
            cpf: format_cpf(&c.cpf),
            telefone: format_telefone(&c.telefone),
            endereco: c.endereco.clone(),
            data_nascimento: format_optional_date(c.data_nascimento),
            status: c.status.badge(),
        }
    }
}
