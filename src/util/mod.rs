//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from session and page logic so
//! both can be exercised natively in tests.

pub mod notify;
pub mod sequence;
