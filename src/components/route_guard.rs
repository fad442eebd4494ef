//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `RouteGuard`. On mount it runs
//! `guard::evaluate`, which waits for session initialization the first time,
//! and only then renders the page. While the page is shown, session changes
//! that revoke access (logout, failed refresh) redirect again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_services;
use crate::routes;
use crate::session::guard::{self, GuardDecision};

fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only when the named route's access policy allows it.
#[component]
pub fn RouteGuard(route: &'static str, children: ChildrenFn) -> impl IntoView {
    let services = use_services();
    let meta = routes::meta_for(route);
    let allowed = RwSignal::new(false);
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    {
        let navigate = navigate.clone();
        let (session, config, toasts) =
            services.with_value(|s| (s.session.clone(), s.config.clone(), s.toasts.clone()));
        leptos::task::spawn_local(async move {
            match guard::evaluate(&session, meta, &config, &toasts).await {
                GuardDecision::Allow => allowed.set(true),
                GuardDecision::Redirect { to, .. } => navigate(to, redirect_options()),
            }
        });
    }

    let state = services.with_value(|s| s.session.state());
    Effect::new(move || {
        let state = state.get();
        if !state.initialized || !allowed.get_untracked() {
            return;
        }
        let decision = services.with_value(|s| guard::decide(meta, &state, &s.config));
        if let GuardDecision::Redirect { to, .. } = decision {
            log::debug!("access to {route} lost; redirecting to {to}");
            allowed.set(false);
            navigate(to, redirect_options());
        }
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="page-loading">"Carregando..."</p> }
        >
            {children()}
        </Show>
    }
}
