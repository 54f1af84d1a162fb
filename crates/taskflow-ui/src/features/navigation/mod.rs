//! Sidebar navigation feature wiring.
//!
//! # Design
//! - Keep entries, routing decisions and the mobile drawer state DOM-free for native tests.
//! - Views in `components` only translate events into these transitions.

pub mod actions;
pub mod layout;
pub mod routes;
pub mod state;
