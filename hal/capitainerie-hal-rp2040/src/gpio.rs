//! GPIO wrappers

use capitainerie_core::slideshow::StopSignal;
use capitainerie_hal::{InputPin, OutputPin};
use embassy_rp::gpio::{Input, Output};

/// Push-pull output
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Momentary stop button, active low
///
/// One press is enough: the request stays latched until the slideshow has
/// seen it, even if the button is released during a page render.
pub struct StopButton<I> {
    pin: I,
    pressed: bool,
}

impl<I: InputPin> StopButton<I> {
    pub fn new(pin: I) -> Self {
        Self {
            pin,
            pressed: false,
        }
    }
}

impl<I: InputPin> StopSignal for StopButton<I> {
    fn poll(&mut self) -> bool {
        if !self.pressed && self.pin.is_low() {
            #[cfg(feature = "defmt")]
            defmt::info!("Stop button pressed");
            self.pressed = true;
        }
        self.pressed
    }
}
