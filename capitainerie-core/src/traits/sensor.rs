//! Wind sensor access

use crate::reading::Reading;

/// The pair of wind sensors on the station bus
///
/// Each call performs one complete bus exchange and blocks until it is
/// done, so two calls never overlap on the shared line. Failures are not
/// errors: a sensor that does not answer yields `None`.
pub trait WindSensors {
    /// Query the wind vane for its sector code (0-7)
    fn wind_direction(&mut self) -> Reading;

    /// Query the anemometer for its speed in 0.1 m/s
    fn wind_speed(&mut self) -> Reading;
}

impl<T: WindSensors + ?Sized> WindSensors for &mut T {
    fn wind_direction(&mut self) -> Reading {
        (**self).wind_direction()
    }

    fn wind_speed(&mut self) -> Reading {
        (**self).wind_speed()
    }
}
