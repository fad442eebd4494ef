use std::rc::Rc;

use super::*;
use crate::test_helpers::{FixedToken, MockTransport};

fn client_with(transport: &Rc<MockTransport>) -> AuthorizedClient {
    AuthorizedClient::new(transport.clone(), Rc::new(FixedToken(Some("tok".to_owned()))), "/api")
}

#[test]
fn usuario_path_formats_id() {
    assert_eq!(usuario_path(12), "usuarios/12");
}

#[tokio::test]
async fn list_omits_blank_name_filter() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"usuarios":[{"id":1,"nome":"Ana","admin":true}]}"#);

    let usuarios = list(&client_with(&transport), Some("  ")).await.unwrap();
    assert_eq!(usuarios.len(), 1);
    assert!(transport.requests()[0].query.is_empty());
}

#[tokio::test]
async fn update_patches_with_body() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"usuario":{"id":5,"nome":"Bia","admin":false}}"#);
    let input = UsuarioInput { nome: "Bia".to_owned(), email: "b@x.com".to_owned(), senha: None, admin: false };

    let usuario = update(&client_with(&transport), 5, &input).await.unwrap();
    assert_eq!(usuario.nome, "Bia");

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Patch);
    assert_eq!(sent[0].url, "/api/usuarios/5");
    assert_eq!(sent[0].body.as_ref().and_then(|b| b.get("email")), Some(&serde_json::json!("b@x.com")));
}
