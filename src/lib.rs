//! DevLinks - browser enhancement layer for a personal link-in-bio page.
//!
//! Compiled to WebAssembly, the crate attaches to an already-rendered page
//! and adds theme switching, decorative pointer effects, click logging, and
//! accessibility affordances. The theme preference state machine is pure
//! Rust and lives in [`controller`]; everything that touches the document
//! tree is gated to the `wasm32` target.

pub mod constants;
pub mod controller;
pub mod effect_math;
pub mod theme;

pub use controller::{PreferenceStore, StoreError, ThemeController, ThemeSurface};
pub use theme::{Mode, Source};

#[cfg(target_arch = "wasm32")]
mod a11y;
#[cfg(target_arch = "wasm32")]
mod analytics;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod effects;
#[cfg(target_arch = "wasm32")]
mod perf;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::start;
