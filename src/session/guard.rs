//! Navigation guard: route access policy over session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated by `RouteGuard` before a page renders. The first evaluation in
//! the app lifetime waits for session initialization; later ones see
//! `initialized == true` and decide immediately.
//!
//! Precedence is strict: authentication is checked before admin, so an
//! anonymous user on an admin route goes to login, not to the landing page.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::controller::Session;
use super::state::SessionState;
use crate::config::ClientConfig;
use crate::routes::RouteMeta;
use crate::util::notify::{NoticeLevel, Notifier};

pub const NOT_AUTHENTICATED: &str = "Você precisa estar autenticado para acessar esta página.";
pub const NOT_AUTHORIZED: &str = "Você não tem permissão para acessar esta página.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: &'static str, notice: Option<Notice> },
}

/// Pure access decision for a settled session.
#[must_use]
pub fn decide(meta: RouteMeta, state: &SessionState, config: &ClientConfig) -> GuardDecision {
    let authenticated = state.is_authenticated();
    if meta.requires_auth && !authenticated {
        return GuardDecision::Redirect {
            to: config.login_path,
            notice: Some(Notice { level: NoticeLevel::Error, message: NOT_AUTHENTICATED }),
        };
    }
    if meta.requires_admin && !state.is_admin() {
        return GuardDecision::Redirect {
            to: config.landing_path,
            notice: Some(Notice { level: NoticeLevel::Warning, message: NOT_AUTHORIZED }),
        };
    }
    if meta.guest_only && authenticated {
        return GuardDecision::Redirect { to: config.landing_path, notice: None };
    }
    GuardDecision::Allow
}

/// Initialize the session if needed, decide, and emit the redirect notice.
pub async fn evaluate(
    session: &Session,
    meta: RouteMeta,
    config: &ClientConfig,
    notifier: &dyn Notifier,
) -> GuardDecision {
    if !session.snapshot().initialized {
        session.initialize().await;
    }
    let decision = decide(meta, &session.snapshot(), config);
    if let GuardDecision::Redirect { to, notice } = decision {
        log::debug!("navigation redirected to {to}");
        if let Some(notice) = notice {
            notifier.notify(notice.level, notice.message);
        }
    }
    decision
}
