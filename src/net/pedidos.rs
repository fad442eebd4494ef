//! Pedido CRUD calls. All requests are authorized by the session token.

#[cfg(test)]
#[path = "pedidos_test.rs"]
mod pedidos_test;

use super::authorizer::AuthorizedClient;
use super::transport::{HttpRequest, Method};
use super::types::{Pedido, PedidoFiltro, PedidoResponse, PedidosResponse, TipoPedido};
use crate::error::ApiError;

fn pedido_path(tipo: TipoPedido, numero: i64) -> String {
    format!("pedidos/{}/{numero}", tipo.as_str())
}

/// `GET /pedidos` with the filter as query parameters.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn list(client: &AuthorizedClient, filtro: &PedidoFiltro) -> Result<Vec<Pedido>, ApiError> {
    let req = HttpRequest::get(client.url("pedidos")).query(filtro.to_query());
    let body: PedidosResponse = client.send_json(req).await?;
    Ok(body.pedidos)
}

/// `GET /pedidos/{tipo}/{numero}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] with status 404 if the pedido does not exist.
pub async fn get(client: &AuthorizedClient, tipo: TipoPedido, numero: i64) -> Result<Pedido, ApiError> {
    let req = HttpRequest::get(client.url(&pedido_path(tipo, numero)));
    let body: PedidoResponse = client.send_json(req).await?;
    Ok(body.pedido)
}

/// `POST /pedidos`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn create(client: &AuthorizedClient, pedido: &Pedido) -> Result<Pedido, ApiError> {
    let req = HttpRequest::post(client.url("pedidos")).json(pedido)?;
    let body: PedidoResponse = client.send_json(req).await?;
    Ok(body.pedido)
}

/// `PUT /pedidos/{tipo}/{numero}`; the pedido's own `tipo`/`numero` address it.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn update(client: &AuthorizedClient, pedido: &Pedido) -> Result<Pedido, ApiError> {
    let url = client.url(&pedido_path(pedido.tipo, pedido.numero));
    let req = HttpRequest::new(Method::Put, url).json(pedido)?;
    let body: PedidoResponse = client.send_json(req).await?;
    Ok(body.pedido)
}

/// `DELETE /pedidos/{tipo}/{numero}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn delete(client: &AuthorizedClient, tipo: TipoPedido, numero: i64) -> Result<(), ApiError> {
    let req = HttpRequest::new(Method::Delete, client.url(&pedido_path(tipo, numero)));
    client.send_unit(req).await
}
