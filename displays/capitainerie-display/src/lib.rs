//! Display abstraction and page rendering for the Capitainerie station
//!
//! This crate provides:
//! - `DisplayBackend` trait for pixel displays (clear, text, raw images)
//! - `GraphicsBackend`, an adapter from any `embedded-graphics` RGB565
//!   draw target plus a backlight pin to `DisplayBackend`
//! - The RGB565 palette used by the pages
//! - `Station`, the page renderer driving the slideshow
//!
//! # Architecture
//!
//! The renderer only talks to `DisplayBackend`, so page layout is tested on
//! the host against a recording backend. The firmware wraps its panel driver
//! in `GraphicsBackend` and hands it to `Station` together with the wall
//! clock and the wind sensors.

#![no_std]

pub mod backend;
pub mod color;
pub mod graphics;
pub mod renderer;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, RawImage};
pub use color::color565;
pub use graphics::GraphicsBackend;
pub use renderer::{render, render_logo, render_weather, RenderError, Station};
