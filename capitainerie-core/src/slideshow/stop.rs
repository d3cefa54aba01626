//! Cooperative stop signalling
//!
//! The scheduler never aborts a render. It samples a [`StopSignal`] at page
//! boundaries and while dwelling, and leaves the loop at the next boundary
//! once a stop has been seen.

use core::sync::atomic::{AtomicBool, Ordering};

/// Source of operator stop requests
pub trait StopSignal {
    /// Sample the signal; `true` once a stop has been requested
    fn poll(&mut self) -> bool;
}

impl<T: StopSignal + ?Sized> StopSignal for &mut T {
    fn poll(&mut self) -> bool {
        (**self).poll()
    }
}

/// Latching stop flag
///
/// Can live in a `static` and be set from an interrupt handler; only plain
/// loads and stores are used, which every Cortex-M core supports.
#[derive(Debug, Default)]
pub struct StopFlag {
    requested: AtomicBool,
}

impl StopFlag {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
        }
    }

    /// Request a stop; stays set until [`StopFlag::clear`]
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
    }

    pub fn clear(&self) {
        self.requested.store(false, Ordering::Release);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }
}

impl StopSignal for &StopFlag {
    fn poll(&mut self) -> bool {
        self.is_requested()
    }
}

impl StopSignal for StopFlag {
    fn poll(&mut self) -> bool {
        self.is_requested()
    }
}
