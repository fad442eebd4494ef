//! # pedidos-web
//!
//! Leptos + WASM frontend for the pedidos request-tracking application.
//!
//! The core of the crate is the client-side authentication session: a
//! persistent token store, reactive session state, the controller that
//! initializes, logs in, refreshes and logs out, the request authorizer that
//! attaches the bearer token to API calls, and the navigation guard that
//! gates routes on authentication and admin rights. Pages, components and
//! the REST wrappers sit on top of it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;

#[cfg(test)]
pub mod test_helpers;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::ClientConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::ClientConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::error!("invalid build configuration, using defaults: {e}");
    }
    log::info!("pedidos-web starting; api base {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
