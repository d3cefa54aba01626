//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in capitainerie-core, written against the capitainerie-hal traits:
//!
//! - RS-485 half-duplex transceiver control (direction line, turnaround)
//! - Wind sensor queries (Modbus-RTU read of one holding register)

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
pub mod transceiver;

#[cfg(test)]
mod mock;
