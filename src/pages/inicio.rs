//! Authenticated landing page.

use leptos::prelude::*;

use crate::app::use_services;
use crate::session::state::SessionState;

#[component]
pub fn InicioPage() -> impl IntoView {
    let state: ReadSignal<SessionState> = use_services().with_value(|s| s.session.state()).into();
    let greeting = move || {
        state.with(|s| s.user.as_ref().map(|u| format!("Olá, {}.", u.nome)).unwrap_or_default())
    };

    view! {
        <section class="inicio">
            <h1>{greeting}</h1>
            <ul class="inicio__links">
                <li><a href="/pedidos">"Consultar pedidos"</a></li>
                <li hidden=move || !state.with(SessionState::is_admin)>
                    <a href="/usuarios">"Gerenciar usuários"</a>
                </li>
            </ul>
        </section>
    }
}
