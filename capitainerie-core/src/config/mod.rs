//! Configuration types
//!
//! Every parameter of the station is a compile-time constant. The types here
//! group them so drivers and the scheduler take one value instead of a loose
//! list of numbers, and tests can shorten the waits.

pub mod timing;

pub use timing::*;
