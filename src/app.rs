//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session, toast queue and authorized API client once and
//! provides them as a single local [`StoredValue`]. The session holds `Rc`
//! handles, so it cannot live in a thread-safe signal; components read it
//! through [`use_services`].

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, route_guard::RouteGuard, toast_host::ToastHost};
use crate::config::ClientConfig;
use crate::net::auth_api::HttpAuthApi;
use crate::net::authorizer::AuthorizedClient;
use crate::net::transport::{GlooTransport, Transport};
use crate::pages::{inicio::InicioPage, login::LoginPage, pedidos::PedidosPage, usuarios::UsuariosPage};
use crate::session::Session;
use crate::session::store::{BrowserStorage, KeyValueStorage};
use crate::util::notify::ToastQueue;

/// Everything pages need to talk to the API and the session.
#[derive(Clone)]
pub struct AppServices {
    pub config: ClientConfig,
    pub session: Session,
    pub client: AuthorizedClient,
    pub toasts: ToastQueue,
}

/// Context handle for [`AppServices`].
pub type Services = StoredValue<AppServices, LocalStorage>;

impl AppServices {
    /// Wire the session and API client over one transport.
    pub fn new(config: ClientConfig, storage: Rc<dyn KeyValueStorage>, transport: Rc<dyn Transport>) -> Self {
        let api = Rc::new(HttpAuthApi::new(transport.clone(), config.api_base.clone()));
        let session = Session::new(&config, storage, api);
        let client = session.client(transport, config.api_base.clone());
        Self { config, session, client, toasts: ToastQueue::new() }
    }

    /// Browser wiring: `localStorage` and `fetch`.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, Rc::new(BrowserStorage), Rc::new(GlooTransport))
    }
}

/// Fetch the services provided by [`App`].
///
/// # Panics
///
/// Panics when called outside the `App` tree.
#[must_use]
pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let services: Services = StoredValue::new_local(AppServices::browser(config));
    provide_context(services);

    view! {
        <Title text="Pedidos"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteGuard route="inicio"><InicioPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RouteGuard route="login"><LoginPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("pedidos")
                        view=|| view! { <RouteGuard route="pedidos"><PedidosPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("usuarios")
                        view=|| view! { <RouteGuard route="usuarios"><UsuariosPage/></RouteGuard> }
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
