//! WebGPU client for the air hockey rink
//!
//! Runs the `hockey_core` session in the browser, draws it with wgpu and
//! mirrors score, clock and result into the page. GPU and DOM code is only
//! built for wasm32; keyboard mapping, the camera and scene building are
//! plain Rust and tested natively.

pub mod camera;
pub mod input;
pub mod mesh;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use client::{frame, init_client, key_down, key_up, reset_match};
