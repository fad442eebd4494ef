use std::rc::Rc;

use super::*;
use crate::net::transport::HttpResponse;
use crate::test_helpers::{FixedToken, MockTransport};

const PEDIDO_JSON: &str = r#"{
    "id": 9, "numero": 42, "tipo": "RM", "data_chegada": "Tue, 01 Jun 2021 00:00:00 GMT",
    "secretaria_solicitante": "Obras", "projeto": "Pontes", "descricao": "Cimento"
}"#;

fn client_with(transport: &Rc<MockTransport>) -> AuthorizedClient {
    AuthorizedClient::new(transport.clone(), Rc::new(FixedToken(Some("tok".to_owned()))), "/api")
}

#[test]
fn pedido_path_uses_tipo_code() {
    assert_eq!(pedido_path(TipoPedido::Se, 7), "pedidos/SE/7");
}

#[tokio::test]
async fn list_sends_filter_as_query() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(&format!(r#"{{"pedidos":[{PEDIDO_JSON}]}}"#));
    let filtro = PedidoFiltro { tipo: Some(TipoPedido::Rm), ..PedidoFiltro::default() };

    let pedidos = list(&client_with(&transport), &filtro).await.unwrap();
    assert_eq!(pedidos.len(), 1);
    assert_eq!(pedidos[0].numero, 42);

    let sent = transport.requests();
    assert_eq!(sent[0].url, "/api/pedidos");
    assert_eq!(sent[0].query, vec![("tipo".to_owned(), "RM".to_owned())]);
    assert_eq!(sent[0].header_value("Authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn update_puts_to_pedido_address() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(&format!(r#"{{"pedido":{PEDIDO_JSON}}}"#));
    let pedido: Pedido = serde_json::from_str(PEDIDO_JSON).unwrap();

    update(&client_with(&transport), &pedido).await.unwrap();
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, "/api/pedidos/RM/42");
    let body = sent[0].body.as_ref().unwrap();
    assert_eq!(body["data_chegada"], serde_json::json!("01/06/2021"));
}

#[tokio::test]
async fn get_missing_pedido_is_validation_error() {
    let transport = Rc::new(MockTransport::new());
    transport.push(Ok(HttpResponse { status: 404, body: r#"{"error":"Pedido não encontrado."}"#.to_owned() }));

    let err = get(&client_with(&transport), TipoPedido::Se, 1).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: 404, .. }));
    assert_eq!(err.user_message(), "Pedido não encontrado.");
}

#[tokio::test]
async fn delete_uses_delete_method() {
    let transport = Rc::new(MockTransport::new());
    delete(&client_with(&transport), TipoPedido::Se, 3).await.unwrap();
    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].url, "/api/pedidos/SE/3");
}
