//! Feature slices of the dashboard shell.

pub mod dashboard;
pub mod navigation;
