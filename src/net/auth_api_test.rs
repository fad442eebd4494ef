use super::*;
use crate::net::transport::HttpResponse;
use crate::test_helpers::MockTransport;

fn api_with(transport: &Rc<MockTransport>) -> HttpAuthApi {
    HttpAuthApi::new(transport.clone(), "/api")
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(me_endpoint("/api"), "/api/auth/me");
    assert_eq!(login_endpoint("https://x.test/api"), "https://x.test/api/auth/login");
    assert_eq!(refresh_endpoint("/api"), "/api/auth/refresh");
}

#[tokio::test]
async fn me_posts_with_explicit_bearer() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"usuario":{"id":1,"nome":"Ana","admin":false}}"#);

    let usuario = api_with(&transport).me("abc").await.unwrap();
    assert_eq!(usuario.id, 1);

    let sent = transport.requests();
    assert_eq!(sent[0].method, crate::net::transport::Method::Post);
    assert_eq!(sent[0].url, "/api/auth/me");
    assert_eq!(sent[0].header_value("Authorization"), Some("Bearer abc"));
}

#[tokio::test]
async fn me_maps_401_to_auth_error() {
    let transport = Rc::new(MockTransport::new());
    transport.push(Ok(HttpResponse { status: 401, body: r#"{"msg":"Token has expired"}"#.to_owned() }));

    let err = api_with(&transport).me("old").await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn login_is_anonymous_and_sends_credentials() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"usuario":{"id":2,"admin":true},"access_token":"a","refresh_token":"r"}"#);

    let resp = api_with(&transport).login("ana@example.com", "segredo").await.unwrap();
    assert_eq!(resp.access_token, "a");
    assert_eq!(resp.refresh_token.as_deref(), Some("r"));

    let sent = transport.requests();
    assert!(sent[0].skip_authorization);
    assert!(sent[0].header_value("Authorization").is_none());
    assert_eq!(sent[0].body, Some(serde_json::json!({ "email": "ana@example.com", "senha": "segredo" })));
}

#[tokio::test]
async fn login_surfaces_server_message() {
    let transport = Rc::new(MockTransport::new());
    transport.push(Ok(HttpResponse { status: 401, body: r#"{"error":"Credenciais inválidas."}"#.to_owned() }));

    let err = api_with(&transport).login("a@b.com", "x").await.unwrap_err();
    assert_eq!(err.user_message(), "Credenciais inválidas.");
}

#[tokio::test]
async fn refresh_uses_refresh_token_as_bearer() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"access_token":"fresh"}"#);

    let token = api_with(&transport).refresh("r1").await.unwrap();
    assert_eq!(token, "fresh");
    assert_eq!(transport.requests()[0].header_value("Authorization"), Some("Bearer r1"));
}

#[tokio::test]
async fn refresh_rejects_empty_token() {
    let transport = Rc::new(MockTransport::new());
    transport.push_ok(r#"{"access_token":""}"#);

    assert!(matches!(api_with(&transport).refresh("r1").await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn network_failure_propagates() {
    let transport = Rc::new(MockTransport::new());
    transport.push(Err(ApiError::Network("offline".to_owned())));

    assert_eq!(api_with(&transport).me("abc").await.unwrap_err(), ApiError::Network("offline".to_owned()));
}
