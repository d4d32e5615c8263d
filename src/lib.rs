//! Single-page portfolio site, rendered client-side with Yew. The pure
//! content and animation-math modules build on every target so their unit
//! tests run on the host; everything touching the DOM is wasm-only.

pub mod content;
pub mod motion;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod effects;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod sections;
#[cfg(target_arch = "wasm32")]
pub mod theme;
