//! Reading interpretation
//!
//! Turns raw register values from the sensors into what the weather page
//! shows. Everything here is pure: no bus access, no allocation.
//!
//! A [`Reading`] is `None` whenever the sensor did not answer with a valid
//! frame; the interpreters map that to their own fallback text.

pub mod direction;
pub mod speed;

pub use direction::{direction_label, CompassPoint, ERROR_LABEL, UNKNOWN_LABEL};
pub use speed::{speed_text, speed_value, SpeedText, WindSpeed, SPEED_TEXT_LEN};

/// Raw 16-bit register value, or `None` if the query failed
pub type Reading = Option<u16>;
