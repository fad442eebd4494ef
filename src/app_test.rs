use super::*;
use crate::net::pedidos;
use crate::net::types::PedidoFiltro;
use crate::session::store::MemoryStorage;
use crate::test_helpers::MockTransport;

const LOGIN_BODY: &str = r#"{
    "usuario": {"id": 7, "nome": "Ana", "email": "ana@example.com", "admin": true},
    "access_token": "abc",
    "refresh_token": "def"
}"#;

#[tokio::test]
async fn login_token_flows_into_api_client() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(LOGIN_BODY);
    transport.push_ok(r#"{"pedidos": []}"#);
    let storage = MemoryStorage::new();
    let services = AppServices::new(ClientConfig::default(), Rc::new(storage.clone()), transport.clone());

    let user = services.session.login("ana@example.com", "segredo").await;
    assert_eq!(user.map(|u| u.nome).as_deref(), Ok("Ana"));
    assert_eq!(storage.get("accessToken").as_deref(), Some("abc"));

    let list = pedidos::list(&services.client, &PedidoFiltro::default()).await;
    assert_eq!(list, Ok(Vec::new()));

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "/api/auth/login");
    assert_eq!(requests[0].header_value("authorization"), None);
    assert_eq!(requests[1].url, "/api/pedidos");
    assert_eq!(requests[1].header_value("authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn logout_stops_authorizing_requests() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(LOGIN_BODY);
    transport.push_ok(r#"{"pedidos": []}"#);
    let services = AppServices::new(ClientConfig::default(), Rc::new(MemoryStorage::new()), transport.clone());

    assert!(services.session.login("ana@example.com", "segredo").await.is_ok());
    services.session.logout();
    let _ = pedidos::list(&services.client, &PedidoFiltro::default()).await;

    let requests = transport.requests();
    assert_eq!(requests.last().and_then(|r| r.header_value("authorization")), None);
}
