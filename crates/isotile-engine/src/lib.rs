//! Isotile engine crate.
//!
//! This crate owns draw-order scheduling for an isometric tile world. The scene
//! builder registers static geometry on a [`painter::Painter`] once per load;
//! each frame `Painter::paint` emits a back-to-front command stream that the
//! rasterizer consumes without a depth buffer.

pub mod coords;
pub mod grid;
pub mod logging;
pub mod painter;
pub mod scene;
