//! Toast stack rendered over every page.

use leptos::prelude::*;

use crate::app::use_services;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_services().with_value(|s| s.toasts.clone());
    let dismiss_queue = toasts.clone();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let queue = dismiss_queue.clone();
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.level.intent()) role="alert">
                            <div class="toast__header">
                                <strong>{toast.level.title()}</strong>
                                <button
                                    class="toast__close"
                                    type="button"
                                    aria-label="Fechar"
                                    on:click=move |_| queue.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                            <div class="toast__body">{toast.message}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
