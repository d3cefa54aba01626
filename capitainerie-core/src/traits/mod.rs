//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and the bus drivers.

pub mod sensor;

pub use sensor::WindSensors;
