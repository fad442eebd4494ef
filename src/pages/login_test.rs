use super::*;
use crate::test_helpers::usuario;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  ana@example.com ", " segredo "),
        Ok(("ana@example.com".to_owned(), " segredo ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "segredo"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("ana@example.com", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_rejects_email_without_at() {
    assert_eq!(validate_login_input("ana.example.com", "segredo"), Err(INVALID_EMAIL));
}

#[test]
fn welcome_message_uses_display_name() {
    assert_eq!(welcome_message(&usuario(3, false)), "Bem-vindo(a), Usuário 3!");
}

#[tokio::test]
async fn successful_login_is_redirected_by_guest_guard_only() {
    use crate::routes::RouteMeta;
    use crate::session::guard::{GuardDecision, decide};
    use crate::session::store::MemoryStorage;
    use crate::test_helpers::{MockAuthApi, config, login_response, session_with};

    let api = MockAuthApi::new();
    api.push_login(Ok(login_response(usuario(1, false), "a1", Some("r1"))));
    let session = session_with(true, &MemoryStorage::new(), &api);

    session.login("a@b.com", "x").await.unwrap();

    let decision = decide(RouteMeta::GUEST, &session.snapshot(), &config(true));
    assert_eq!(decision, GuardDecision::Redirect { to: "/", notice: None });
}
