// src/common/nullable.rs

use serde::{Deserialize, Deserializer};

/// O backend manda `null` onde não tem valor (ex: `"administrador": null`).
/// `#[serde(default)]` só cobre o campo ausente; com isto o `null` também
/// vira o valor padrão.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
