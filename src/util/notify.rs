//! User-visible notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard and pages report outcomes through the [`Notifier`]
//! trait only. [`ToastQueue`] is the browser implementation rendered by
//! `ToastHost`; tests record notices instead.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Sucesso",
            Self::Warning => "Atenção",
            Self::Error => "Erro",
        }
    }

    /// CSS modifier for the toast.
    #[must_use]
    pub fn intent(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn display_success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn display_warning(&self, message: &str) {
        self.notify(NoticeLevel::Warning, message);
    }

    fn display_error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastList {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, level, message: message.to_owned() });
        id
    }

    /// Remove a toast; returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Reactive toast queue provided through context.
#[derive(Clone)]
pub struct ToastQueue {
    list: ArcRwSignal<ToastList>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self { list: ArcRwSignal::new(ToastList::default()) }
    }

    /// Visible toasts (tracked).
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.list.with(|l| l.items.clone())
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|l| {
            l.dismiss(id);
        });
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Error => log::warn!("toast: {message}"),
            NoticeLevel::Warning | NoticeLevel::Success => log::debug!("toast: {message}"),
        }
        let mut id = 0;
        self.list.update(|l| id = l.push(level, message));

        #[cfg(feature = "csr")]
        {
            let queue = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                queue.dismiss(id);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
