//! Wire DTOs for the pedidos API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`snake_case`, Portuguese domain
//! terms) so serde needs no renaming. Unknown user fields are kept in
//! `extra` rather than dropped, since the session core only reads `admin`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates;

/// The authenticated user as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    /// Role flag; the only field the session core interprets.
    #[serde(default)]
    pub admin: bool,
    /// Any additional display fields sent by the server.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /auth/login`. The server expects the Portuguese `senha` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub usuario: Usuario,
    pub access_token: String,
    /// Absent when the server does not issue refresh tokens.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub usuario: Usuario,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Request category: `SE` or `RM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoPedido {
    #[serde(rename = "SE")]
    Se,
    #[serde(rename = "RM")]
    Rm,
}

impl TipoPedido {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Se => "SE",
            Self::Rm => "RM",
        }
    }
}

/// A pedido record. Dates are sent as `DD/MM/YYYY` and read back from the
/// server's RFC 1123 form; see [`dates`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub numero: i64,
    pub tipo: TipoPedido,
    #[serde(with = "dates")]
    pub data_chegada: NaiveDate,
    pub secretaria_solicitante: String,
    pub projeto: String,
    pub descricao: String,
    #[serde(default, with = "dates::option")]
    pub data_envio_financeiro: Option<NaiveDate>,
    #[serde(default, with = "dates::option")]
    pub data_retorno_financeiro: Option<NaiveDate>,
    #[serde(default)]
    pub situacao_autorizacao: Option<String>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Search filter for `GET /pedidos`; unset fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PedidoFiltro {
    pub tipo: Option<TipoPedido>,
    pub numero: Option<i64>,
    pub projeto: Option<String>,
    pub secretaria_solicitante: Option<String>,
    pub data_chegada: Option<NaiveDate>,
}

impl PedidoFiltro {
    /// Render the filter as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(tipo) = self.tipo {
            query.push(("tipo".to_owned(), tipo.as_str().to_owned()));
        }
        if let Some(numero) = self.numero {
            query.push(("numero".to_owned(), numero.to_string()));
        }
        let text_fields = [
            ("projeto", &self.projeto),
            ("secretaria_solicitante", &self.secretaria_solicitante),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                query.push((key.to_owned(), value.to_owned()));
            }
        }
        if let Some(data) = self.data_chegada {
            query.push(("data_chegada".to_owned(), dates::to_wire(data)));
        }
        query
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PedidosResponse {
    pub pedidos: Vec<Pedido>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PedidoResponse {
    pub pedido: Pedido,
}

/// Payload for creating or updating a user. `senha` is omitted on update
/// when unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsuarioInput {
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    pub admin: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UsuariosResponse {
    pub usuarios: Vec<Usuario>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UsuarioResponse {
    pub usuario: Usuario,
}
