//! Capitainerie Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040 today). The sensor drivers and the page
//! renderer are written against these traits only, so they run unchanged
//! on the target and in host-side tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Application (capitainerie-firmware)        │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │  capitainerie-hal (this crate - traits)     │
//! └─────────────────────────────────────────────┘
//!                      │
//!                      ▼
//!            ┌───────────────────┐
//!            │ capitainerie-hal- │
//!            │      rp2040       │
//!            └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`clock::WallClock`] - Local wall-clock time

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::{LocalTime, WallClock};
pub use gpio::{InputPin, OutputPin};
pub use uart::{Uart, UartRx, UartTx};
