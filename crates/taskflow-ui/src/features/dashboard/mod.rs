//! Dashboard page feature slice.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
#[cfg(target_arch = "wasm32")]
mod welcome;

#[cfg(target_arch = "wasm32")]
pub(crate) use view::DashboardPage;
