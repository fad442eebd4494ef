//! Networking modules for the pedidos REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` executes raw requests, `authorizer` attaches the session bearer,
//! `auth_api` backs the session controller, `pedidos`/`usuarios` are the thin
//! CRUD wrappers used by pages, `types` defines the wire schema and `dates`
//! converts between its two date formats.

pub mod auth_api;
pub mod authorizer;
pub mod dates;
pub mod pedidos;
pub mod transport;
pub mod types;
pub mod usuarios;
