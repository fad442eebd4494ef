//! Client-side authentication session.
//!
//! DESIGN
//! ======
//! Split leaves-first: `store` (persistent tokens), `state` (committed facts
//! and derived predicates), `controller` (the only writer of both) and
//! `guard` (route policy that reads state and may trigger initialization).

pub mod controller;
pub mod guard;
pub mod state;
pub mod store;

pub use controller::Session;
