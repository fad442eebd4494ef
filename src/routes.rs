//! Route table with access metadata.
//!
//! The guard reads `meta` only; the table itself is never mutated.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Access requirements declared by a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
    /// Only meaningful for anonymous users (the login page).
    pub guest_only: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_admin: false, guest_only: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_admin: false, guest_only: true };
    pub const AUTH: Self = Self { requires_auth: true, requires_admin: false, guest_only: false };
    pub const ADMIN: Self = Self { requires_auth: true, requires_admin: true, guest_only: false };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: "inicio", meta: RouteMeta::AUTH },
    RouteDef { path: "/login", name: "login", meta: RouteMeta::GUEST },
    RouteDef { path: "/pedidos", name: "pedidos", meta: RouteMeta::AUTH },
    RouteDef { path: "/usuarios", name: "usuarios", meta: RouteMeta::ADMIN },
];

#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Metadata for a named route; unknown names are treated as public.
#[must_use]
pub fn meta_for(name: &str) -> RouteMeta {
    find_by_name(name).map_or(RouteMeta::PUBLIC, |r| r.meta)
}
