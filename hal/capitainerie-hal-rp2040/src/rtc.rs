//! RTC-backed wall clock
//!
//! The RP2040 RTC loses its time on power loss. An unset RTC is started at
//! 2000-01-01 00:00 so the weather page always has a time to show.

use capitainerie_hal::{LocalTime, WallClock};
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc, RtcError};

/// Start value for an unset RTC
const EPOCH: DateTime = DateTime {
    year: 2000,
    month: 1,
    day: 1,
    day_of_week: DayOfWeek::Saturday,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Clock errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// RTC is stopped
    NotRunning,
    /// RTC holds a date/time outside its valid range
    InvalidTime,
}

impl From<RtcError> for ClockError {
    fn from(e: RtcError) -> Self {
        match e {
            RtcError::NotRunning => ClockError::NotRunning,
            _ => ClockError::InvalidTime,
        }
    }
}

pub struct RtcClock<'d> {
    rtc: Rtc<'d, RTC>,
}

impl<'d> RtcClock<'d> {
    /// Take over the RTC, starting it at the epoch if it is not running
    pub fn new(mut rtc: Rtc<'d, RTC>) -> Result<Self, ClockError> {
        if !rtc.is_running() {
            #[cfg(feature = "defmt")]
            defmt::info!("RTC not running, starting at 2000-01-01 00:00");
            rtc.set_datetime(EPOCH)?;
        }
        Ok(Self { rtc })
    }
}

impl WallClock for RtcClock<'_> {
    type Error = ClockError;

    fn now(&mut self) -> Result<LocalTime, ClockError> {
        let now = self.rtc.now()?;
        LocalTime::new(now.hour, now.minute).ok_or(ClockError::InvalidTime)
    }
}
