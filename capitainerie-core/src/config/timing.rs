//! Bus and slideshow timing
//!
//! All waits are fixed durations in milliseconds. The defaults match the
//! turnaround the deployed RS-485 transceivers and sensors were tuned for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RS-485 direction switching guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusTiming {
    /// Wait after enabling the driver before the first byte
    pub tx_enable_guard_ms: u32,
    /// Wait after the last byte before releasing the line
    pub tx_drain_guard_ms: u32,
    /// Wait after switching back to receive
    pub rx_settle_ms: u32,
}

impl BusTiming {
    pub const DEFAULT: Self = Self {
        tx_enable_guard_ms: 10,
        tx_drain_guard_ms: 10,
        rx_settle_ms: 50,
    };
}

impl Default for BusTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sensor request/response settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QueryConfig {
    /// Wait after sending a request before reading the answer
    pub response_settle_ms: u32,
    /// Extra attempts after an absent reading (0 = single attempt)
    pub retries: u8,
    /// Wait between attempts
    pub retry_backoff_ms: u32,
}

impl QueryConfig {
    pub const DEFAULT: Self = Self {
        response_settle_ms: 100,
        retries: 0,
        retry_backoff_ms: 50,
    };

    /// Total number of attempts per query
    pub const fn attempts(&self) -> u16 {
        self.retries as u16 + 1
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Slideshow pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlideshowConfig {
    /// How long each page stays on screen
    pub dwell_ms: u32,
    /// Granularity at which the stop signal is sampled while dwelling
    pub stop_poll_ms: u32,
}

impl SlideshowConfig {
    pub const DEFAULT: Self = Self {
        dwell_ms: 5_000,
        stop_poll_ms: 100,
    };
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete station configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationConfig {
    pub bus: BusTiming,
    pub query: QueryConfig,
    pub slideshow: SlideshowConfig,
}

impl StationConfig {
    pub const DEFAULT: Self = Self {
        bus: BusTiming::DEFAULT,
        query: QueryConfig::DEFAULT,
        slideshow: SlideshowConfig::DEFAULT,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_defaults() {
        let timing = BusTiming::default();
        assert!(timing.tx_enable_guard_ms >= 10);
        assert!(timing.rx_settle_ms >= 50);
        assert_eq!(timing, BusTiming::DEFAULT);
    }

    #[test]
    fn test_query_defaults_single_attempt() {
        let query = QueryConfig::default();
        assert!(query.response_settle_ms >= 100);
        assert_eq!(query.attempts(), 1);
    }

    #[test]
    fn test_station_default_matches_parts() {
        let config = StationConfig::default();
        assert_eq!(config, StationConfig::DEFAULT);
        assert_eq!(config.slideshow.dwell_ms, 5_000);
    }
}
