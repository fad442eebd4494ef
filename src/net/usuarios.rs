//! Usuario CRUD calls (admin pages). All requests are authorized by the session token.

#[cfg(test)]
#[path = "usuarios_test.rs"]
mod usuarios_test;

use super::authorizer::AuthorizedClient;
use super::transport::{HttpRequest, Method};
use super::types::{Usuario, UsuarioInput, UsuarioResponse, UsuariosResponse};
use crate::error::ApiError;

fn usuario_path(id: i64) -> String {
    format!("usuarios/{id}")
}

/// `GET /usuarios`, optionally filtered by name.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn list(client: &AuthorizedClient, nome: Option<&str>) -> Result<Vec<Usuario>, ApiError> {
    let mut req = HttpRequest::get(client.url("usuarios"));
    if let Some(nome) = nome.map(str::trim).filter(|n| !n.is_empty()) {
        req = req.query(vec![("nome".to_owned(), nome.to_owned())]);
    }
    let body: UsuariosResponse = client.send_json(req).await?;
    Ok(body.usuarios)
}

/// `GET /usuarios/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] with status 404 if the user does not exist.
pub async fn get(client: &AuthorizedClient, id: i64) -> Result<Usuario, ApiError> {
    let body: UsuarioResponse = client.send_json(HttpRequest::get(client.url(&usuario_path(id)))).await?;
    Ok(body.usuario)
}

/// `POST /usuarios`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn create(client: &AuthorizedClient, input: &UsuarioInput) -> Result<Usuario, ApiError> {
    let req = HttpRequest::post(client.url("usuarios")).json(input)?;
    let body: UsuarioResponse = client.send_json(req).await?;
    Ok(body.usuario)
}

/// `PATCH /usuarios/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn update(client: &AuthorizedClient, id: i64, input: &UsuarioInput) -> Result<Usuario, ApiError> {
    let req = HttpRequest::new(Method::Patch, client.url(&usuario_path(id))).json(input)?;
    let body: UsuarioResponse = client.send_json(req).await?;
    Ok(body.usuario)
}

/// `DELETE /usuarios/{id}`.
///
/// # Errors
///
/// Returns the classified [`ApiError`] on failure.
pub async fn delete(client: &AuthorizedClient, id: i64) -> Result<(), ApiError> {
    client.send_unit(HttpRequest::new(Method::Delete, client.url(&usuario_path(id)))).await
}
