//! Platform abstraction layer
//!
//! Browser builds expose the game to JavaScript, which owns the canvas,
//! the animation-frame loop, and the DOM listeners. Native builds need
//! nothing here.

#[cfg(target_arch = "wasm32")]
pub mod web;
