//! Pedidos list with a type, project and arrival-date filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests go through the session's `AuthorizedClient`, so the bearer token
//! is attached without the page touching it. A 401 surfaces as an error toast;
//! there is no automatic refresh-and-retry. Only the most recent search may
//! replace the table.

#[cfg(test)]
#[path = "pedidos_test.rs"]
mod pedidos_test;

use leptos::prelude::*;

use crate::app::use_services;
use crate::net::dates;
use crate::net::types::{Pedido, PedidoFiltro, TipoPedido};
use crate::util::sequence::RequestSequence;

/// Parse the type `<select>` value; anything else means "all types".
pub(crate) fn parse_tipo(value: &str) -> Option<TipoPedido> {
    match value.trim().to_ascii_uppercase().as_str() {
        "SE" => Some(TipoPedido::Se),
        "RM" => Some(TipoPedido::Rm),
        _ => None,
    }
}

/// Build the list filter from the form fields. An arrival date that does not
/// parse is left out of the query.
pub(crate) fn build_filtro(tipo: &str, projeto: &str, data_chegada: &str) -> PedidoFiltro {
    let projeto = projeto.trim();
    PedidoFiltro {
        tipo: parse_tipo(tipo),
        projeto: (!projeto.is_empty()).then(|| projeto.to_owned()),
        data_chegada: dates::parse(data_chegada),
        ..PedidoFiltro::default()
    }
}

pub(crate) fn pedido_label(pedido: &Pedido) -> String {
    format!("{} {}", pedido.tipo.as_str(), pedido.numero)
}

#[component]
pub fn PedidosPage() -> impl IntoView {
    let services = use_services();
    let tipo = RwSignal::new(String::new());
    let projeto = RwSignal::new(String::new());
    let data_chegada = RwSignal::new(String::new());
    let pedidos = RwSignal::new(Vec::<Pedido>::new());
    let loading = RwSignal::new(false);
    let sequence = RequestSequence::new();

    let load = move || {
        let filtro =
            build_filtro(&tipo.get_untracked(), &projeto.get_untracked(), &data_chegada.get_untracked());
        let ticket = sequence.begin();
        loading.set(true);

        #[cfg(feature = "csr")]
        {
            use crate::util::notify::Notifier;

            let sequence = sequence.clone();
            let (client, toasts) = services.with_value(|s| (s.client.clone(), s.toasts.clone()));
            leptos::task::spawn_local(async move {
                let result = crate::net::pedidos::list(&client, &filtro).await;
                sequence.commit_if_latest(ticket, || {
                    match result {
                        Ok(list) => pedidos.set(list),
                        Err(e) => {
                            log::warn!("pedido list failed: {e}");
                            toasts.display_error(&e.user_message());
                        }
                    }
                    loading.set(false);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (filtro, ticket, services);
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
        <section class="pedidos">
            <h1>"Pedidos"</h1>
            <form class="filter-form" on:submit=on_search>
                <select on:change=move |ev| tipo.set(event_target_value(&ev)) prop:value=move || tipo.get()>
                    <option value="">"Todos"</option>
                    <option value="SE">"SE"</option>
                    <option value="RM">"RM"</option>
                </select>
                <input
                    type="text"
                    placeholder="Projeto"
                    prop:value=move || projeto.get()
                    on:input=move |ev| projeto.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Chegada (dd/mm/aaaa)"
                    prop:value=move || data_chegada.get()
                    on:input=move |ev| data_chegada.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>"Buscar"</button>
            </form>
            <Show
                when=move || !pedidos.with(Vec::is_empty)
                fallback=move || view! {
                    <p class="empty">{move || if loading.get() { "Carregando..." } else { "Nenhum pedido encontrado." }}</p>
                }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Pedido"</th>
                            <th>"Chegada"</th>
                            <th>"Secretaria"</th>
                            <th>"Projeto"</th>
                            <th>"Situação"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || pedidos.get()
                            key=|pedido| (pedido.tipo, pedido.numero)
                            children=move |pedido| {
                                view! {
                                    <tr>
                                        <td>{pedido_label(&pedido)}</td>
                                        <td>{dates::to_wire(pedido.data_chegada)}</td>
                                        <td>{pedido.secretaria_solicitante.clone()}</td>
                                        <td>{pedido.projeto.clone()}</td>
                                        <td>{pedido.situacao_autorizacao.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
