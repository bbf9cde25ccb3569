// src/models/status.rs

use serde::Serialize;
use utoipa::ToSchema;

// Cores usadas pelo badge de status no painel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Success,
    Danger,
    Warning,
    Info,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusBadge {
    #[schema(example = "ATIVO")]
    pub value: String,
    #[schema(example = "Ativo")]
    pub label: String,
    pub color: BadgeColor,
}

/// Enums de status vindos do backend: valor no fio, rótulo e cor.
pub trait StatusDisplay: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn color(&self) -> BadgeColor;

    fn badge(&self) -> StatusBadge {
        StatusBadge {
            value: self.as_str().to_string(),
            label: self.label().to_string(),
            color: self.color(),
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Opções do dropdown de troca de status.
    fn options() -> Vec<StatusBadge> {
        Self::ALL.iter().map(|s| s.badge()).collect()
    }
}
