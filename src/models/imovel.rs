// src/models/imovel.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::formatters::format_brl;
use crate::common::nullable::null_as_default;
use crate::models::status::{BadgeColor, StatusBadge, StatusDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImovelStatus {
    #[default]
    Disponivel,
    Alugado,
    Manutencao,
    Reservado,
}

impl StatusDisplay for ImovelStatus {
    const ALL: &'static [Self] = &[
        Self::Disponivel,
        Self::Alugado,
        Self::Manutencao,
        Self::Reservado,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Disponivel => "DISPONIVEL",
            Self::Alugado => "ALUGADO",
            Self::Manutencao => "MANUTENCAO",
            Self::Reservado => "RESERVADO",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Disponivel => "Disponível",
            Self::Alugado => "Alugado",
            Self::Manutencao => "Em manutenção",
            Self::Reservado => "Reservado",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            Self::Disponivel => BadgeColor::Success,
            Self::Alugado => BadgeColor::Info,
            Self::Manutencao => BadgeColor::Warning,
            Self::Reservado => BadgeColor::Default,
        }
    }
}

// Tipos aceitos pelo formulário de cadastro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImovelTipo {
    Casa,
    Apartamento,
    Comercial,
}

impl ImovelTipo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Casa => "CASA",
            Self::Apartamento => "APARTAMENTO",
            Self::Comercial => "COMERCIAL",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Administrador {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

// Tudo com default: o backend às vezes manda o imóvel incompleto
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Imovel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "IMV-001")]
    pub codigo: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "Apartamento Centro")]
    pub nome: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub endereco: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "1500.00")]
    pub valor_mensal: Decimal,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "APARTAMENTO")]
    pub tipo: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ImovelStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fotos: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub administrador: Administrador,
}

// Resumo do imóvel embutido em contratos e pagamentos
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelRef {
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub codigo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub endereco: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo: String,
    pub administrador: Option<Administrador>,
}

// Corpo de POST /imoveis e PUT /imoveis/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImovelRequest {
    pub nome: String,
    pub endereco: String,
    pub descricao: String,
    pub valor_mensal: Decimal,
    pub tipo: String,
    pub status: ImovelStatus,
    pub fotos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrador_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelRow {
    pub id: i64,
    pub codigo: String,
    pub nome: String,
    pub endereco: String,
    pub tipo: String,
    #[schema(example = "R$ 1.500,00")]
    pub valor_mensal: String,
    pub status: StatusBadge,
    pub foto_capa: Option<String>,
    pub administrador: String,
}

impl From<&Imovel> for ImovelRow {
    fn from(i: &Imovel) -> Self {
        Self {
            id: i.id,
            codigo: i.codigo.clone(),
            nome: i.nome.clone(),
            endereco: i.endereco.clone(),
            tipo: i.tipo.clone(),
            valor_mensal: format_brl(i.valor_mensal),
            status: i.status.badge(),
            foto_capa: i.fotos.first().cloned(),
            administrador: i.administrador.nome.clone(),
        }
    }
}

// Resposta do POST /upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    pub message: Option<String>,
}
