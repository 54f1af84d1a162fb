//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod classes;
pub mod config;
pub mod metadata;
pub mod store;
pub mod theme;
pub mod ui;
