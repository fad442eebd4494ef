//! Login page: email + password against `POST /auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route. A successful `Session::login` commits the session; the
//! page does not navigate itself. The `RouteGuard` wrapping it sees the
//! session turn authenticated and replaces the location with the landing
//! route, so there is exactly one navigation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::use_services;
use crate::net::types::Usuario;
#[cfg(feature = "csr")]
use crate::util::notify::Notifier;

const MISSING_FIELDS: &str = "Informe e-mail e senha.";
const INVALID_EMAIL: &str = "Informe um e-mail válido.";

/// Trim the email and require both fields. The password is sent as typed.
pub(crate) fn validate_login_input(email: &str, senha: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || senha.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), senha.to_owned()))
}

pub(crate) fn welcome_message(user: &Usuario) -> String {
    format!("Bem-vindo(a), {}!", user.nome)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, senha_value) = match validate_login_input(&email.get(), &senha.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "csr")]
        {
            let (session, toasts) = services.with_value(|s| (s.session.clone(), s.toasts.clone()));
            leptos::task::spawn_local(async move {
                match session.login(&email_value, &senha_value).await {
                    Ok(user) => toasts.display_success(&welcome_message(&user)),
                    Err(e) => {
                        let message = e.user_message();
                        toasts.display_error(&message);
                        info.set(message);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (email_value, senha_value, services);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Pedidos"</h1>
                <p class="login-card__subtitle">"Acesse com seu e-mail e senha"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="voce@exemplo.com"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        autocomplete="current-password"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
