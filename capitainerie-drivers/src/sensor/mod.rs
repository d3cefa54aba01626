//! Sensor implementations

pub mod wind;

pub use wind::{query, WindStation};
