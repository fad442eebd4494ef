//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and keeps its input parsing and
//! formatting in plain functions so they can be unit tested natively.

pub mod inicio;
pub mod login;
pub mod pedidos;
pub mod usuarios;
