//! Board-agnostic core logic for the wind station firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Reading interpretation (compass labels, wind speed scaling)
//! - Slideshow page model and scheduler loop
//! - Cooperative stop signalling
//! - Timing configuration
//! - The sensor trait implemented by the bus drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod reading;
pub mod slideshow;
pub mod traits;
