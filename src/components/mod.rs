//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and route gating while reading shared
//! services from the context provided by `App`.

pub mod nav_bar;
pub mod route_guard;
pub mod toast_host;
