//! Top navigation bar with role-aware links and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_services;
use crate::session::state::SessionState;
use crate::util::notify::Notifier;

const LOGGED_OUT: &str = "Sessão encerrada.";

#[component]
pub fn NavBar() -> impl IntoView {
    let services = use_services();
    let state: ReadSignal<SessionState> = services.with_value(|s| s.session.state()).into();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let login_path = services.with_value(|s| {
            s.session.logout();
            s.toasts.display_success(LOGGED_OUT);
            s.config.login_path
        });
        navigate(login_path, NavigateOptions::default());
    };

    let user_name = move || state.with(|s| s.user.as_ref().map(|u| u.nome.clone()).unwrap_or_default());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Pedidos"</a>
            <div class="navbar__links" hidden=move || !state.with(SessionState::is_authenticated)>
                <a href="/pedidos">"Pedidos"</a>
                <a href="/usuarios" hidden=move || !state.with(SessionState::is_admin)>"Usuários"</a>
                <span class="navbar__user">{user_name}</span>
                <button class="navbar__logout" type="button" on:click=on_logout>"Sair"</button>
            </div>
        </nav>
    }
}
