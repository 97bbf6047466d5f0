//! Contract (contrato) models

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::serde_helpers::{bool_false, flexible_f64, flexible_i64};

/// Status assigned when the payload does not carry one
pub const DEFAULT_STATUS: &str = "Ativo";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Deserialize status, treating null like an absent field
fn status_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_else(default_status))
}

/// Contract document as written by create and full-replace update
///
/// Wire names are camelCase. Unknown fields (such as an `id` echoed back by
/// the front-end on edit) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContratoPayload {
    pub nome_amigavel: String,
    pub filial: String,
    pub tipo: String,
    pub centro_custo: String,
    #[serde(deserialize_with = "flexible_f64")]
    pub valor_total: f64,
    #[serde(deserialize_with = "flexible_i64")]
    pub duracao: i64,
    /// Kept verbatim; the front-end sends a formatted currency string
    pub valor_mensal: String,
    pub fornecedor1: String,
    pub cnpj1: String,
    #[serde(default = "default_status", deserialize_with = "status_or_default")]
    pub status: String,
    #[serde(default)]
    pub data_inicio: Option<String>,
    #[serde(default)]
    pub dia_vencimento: Option<String>,
    #[serde(default)]
    pub circ1: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    /// Secondary supplier, free-form (`razao`, `cnpj`, `circ`, ...)
    #[serde(default)]
    pub fornecedor2: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "bool_false")]
    pub is_rateado: bool,
}

/// Stored contract as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    /// Store-assigned identifier
    pub id: String,
    #[serde(flatten)]
    pub data: ContratoPayload,
}

/// Response of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContratoCreated {
    pub id: String,
}

/// Acknowledgement of update/delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAck {
    pub status: String,
}

impl StatusAck {
    pub fn updated() -> Self {
        Self {
            status: "updated".to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}
