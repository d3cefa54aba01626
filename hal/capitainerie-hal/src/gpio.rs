//! GPIO pin abstractions
//!
//! The firmware drives two outputs (RS-485 driver enable, display backlight)
//! and samples one input (the operator stop button).

/// Digital output pin
///
/// Implementations own the pin and remember the last level written, so the
/// state of a control line can be observed without reading back hardware.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to the given level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level driven on the pin
    fn is_set_high(&self) -> bool;

    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
