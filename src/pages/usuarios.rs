//! User administration list (admin only).

#[cfg(test)]
#[path = "usuarios_test.rs"]
mod usuarios_test;

use leptos::prelude::*;

use crate::app::use_services;
use crate::net::types::Usuario;
use crate::util::sequence::RequestSequence;

pub(crate) fn admin_label(admin: bool) -> &'static str {
    if admin { "Sim" } else { "Não" }
}

/// Name filter for `GET /usuarios`; blank means no filter.
pub(crate) fn nome_filter(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let services = use_services();
    let nome = RwSignal::new(String::new());
    let usuarios = RwSignal::new(Vec::<Usuario>::new());
    let loading = RwSignal::new(false);
    let sequence = RequestSequence::new();

    let load = move || {
        let filter = nome_filter(&nome.get_untracked());
        let ticket = sequence.begin();
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::util::notify::Notifier;

            let sequence = sequence.clone();
            let (client, toasts) = services.with_value(|s| (s.client.clone(), s.toasts.clone()));
            leptos::task::spawn_local(async move {
                let result = crate::net::usuarios::list(&client, filter.as_deref()).await;
                sequence.commit_if_latest(ticket, || {
                    match result {
                        Ok(list) => usuarios.set(list),
                        Err(e) => {
                            log::warn!("usuario list failed: {e}");
                            toasts.display_error(&e.user_message());
                        }
                    }
                    loading.set(false);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (filter, ticket, services);
    };

    let on_search = {
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            load();
        }
    };
    load();

    view! {
        <section class="usuarios">
            <h1>"Usuários"</h1>
            <form class="filter-form" on:submit=on_search>
                <input
                    type="text"
                    placeholder="Nome"
                    prop:value=move || nome.get()
                    on:input=move |ev| nome.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>"Buscar"</button>
            </form>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"E-mail"</th>
                        <th>"Administrador"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || usuarios.get()
                        key=|usuario| usuario.id
                        children=move |usuario| {
                            view! {
                                <tr>
                                    <td>{usuario.nome.clone()}</td>
                                    <td>{usuario.email.clone()}</td>
                                    <td>{admin_label(usuario.admin)}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
