//! Slideshow page renderer
//!
//! Two fixed layouts on a landscape panel:
//!
//! ```text
//! Logo                         WeatherSummary (black)
//! +--------------------------+ +--------------------------+
//! |    +----------------+    | |    CAPITAINERIE DATA     |
//! |    |   240 x 240    |    | |  Wind speed:             |
//! |    |      logo      |    | |  12.3 m/s                |
//! |    |                |    | |  Wind direction:         |
//! |    +----------------+    | |  South-East              |
//! +--------------------------+ |                    14:05 |
//!        white                 +--------------------------+
//! ```
//!
//! The weather page queries the sensors while it draws: speed first, then
//! direction, each right before its value is drawn.

use core::fmt::Write;

use capitainerie_core::reading::{direction_label, speed_text, SPEED_TEXT_LEN};
use capitainerie_core::slideshow::{Page, PageRenderer};
use capitainerie_core::traits::WindSensors;
use capitainerie_hal::WallClock;
use heapless::String;

use crate::backend::{DisplayBackend, DisplayError, RawImage};
use crate::color::{BLACK, CLOCK, LABEL, TITLE, VALUE, WHITE};

/// Top-left corner of the logo
pub const LOGO_ORIGIN: (u16, u16) = (40, 0);
/// Side of the square logo in pixels
pub const LOGO_SIDE: u16 = 240;

pub const TITLE_TEXT: &str = "CAPITAINERIE DATA";
pub const SPEED_LABEL: &str = "Wind speed:";
pub const DIRECTION_LABEL: &str = "Wind direction:";

pub const TITLE_POS: (u16, u16) = (40, 20);
pub const SPEED_LABEL_POS: (u16, u16) = (24, 70);
pub const SPEED_VALUE_POS: (u16, u16) = (24, 100);
pub const DIRECTION_LABEL_POS: (u16, u16) = (24, 140);
pub const DIRECTION_VALUE_POS: (u16, u16) = (24, 170);

/// Appended to the speed value
const SPEED_UNIT: &str = " m/s";
const SPEED_LINE_LEN: usize = SPEED_TEXT_LEN + SPEED_UNIT.len();

/// Room for `HH:MM` even if the clock hands out unchecked fields
const CLOCK_TEXT_LEN: usize = 7;
const _: () = assert!("255:255".len() <= CLOCK_TEXT_LEN);

/// Clock distance from the right edge
const CLOCK_MARGIN_RIGHT: u16 = 10;
/// Clock distance from the bottom edge
const CLOCK_MARGIN_BOTTOM: u16 = 5;

/// Page rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// A draw primitive failed
    Display(DisplayError),
    /// The wall clock could not be read
    Clock,
}

impl From<DisplayError> for RenderError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

/// Logo page: white background, logo centred horizontally
pub fn render_logo<B: DisplayBackend>(
    display: &mut B,
    logo: &RawImage<'_>,
) -> Result<(), RenderError> {
    display.clear(WHITE)?;
    display.draw_image(LOGO_ORIGIN.0, LOGO_ORIGIN.1, logo)?;
    Ok(())
}

/// Weather page: live readings and the time of day
pub fn render_weather<B, C, S>(
    display: &mut B,
    clock: &mut C,
    sensors: &mut S,
) -> Result<(), RenderError>
where
    B: DisplayBackend,
    C: WallClock,
    S: WindSensors,
{
    display.clear(BLACK)?;
    text(display, TITLE_POS, TITLE_TEXT, TITLE)?;

    text(display, SPEED_LABEL_POS, SPEED_LABEL, LABEL)?;
    let mut speed: String<SPEED_LINE_LEN> = String::new();
    // Sized for the longest value plus unit, cannot overflow
    write!(speed, "{}{}", speed_text(sensors.wind_speed()), SPEED_UNIT).ok();
    text(display, SPEED_VALUE_POS, &speed, VALUE)?;

    text(display, DIRECTION_LABEL_POS, DIRECTION_LABEL, LABEL)?;
    let direction = direction_label(sensors.wind_direction());
    text(display, DIRECTION_VALUE_POS, direction, VALUE)?;

    let now = clock.now().map_err(|_| RenderError::Clock)?;
    let mut time: String<CLOCK_TEXT_LEN> = String::new();
    // Cannot overflow, see CLOCK_TEXT_LEN
    write!(time, "{}", now).ok();
    let pos = clock_position(display, time.len());
    text(display, pos, &time, CLOCK)
}

/// Draw `page` in full
pub fn render<B, C, S>(
    page: Page,
    display: &mut B,
    clock: &mut C,
    sensors: &mut S,
    logo: &RawImage<'_>,
) -> Result<(), RenderError>
where
    B: DisplayBackend,
    C: WallClock,
    S: WindSensors,
{
    match page {
        Page::Logo => render_logo(display, logo),
        Page::WeatherSummary => render_weather(display, clock, sensors),
    }
}

fn text<B: DisplayBackend>(
    display: &mut B,
    (x, y): (u16, u16),
    message: &str,
    color: u16,
) -> Result<(), RenderError> {
    display.draw_text(x, y, message, color, BLACK)?;
    Ok(())
}

/// Bottom-right anchor for `len` glyphs
fn clock_position<B: DisplayBackend>(display: &B, len: usize) -> (u16, u16) {
    let (glyph_w, glyph_h) = display.glyph_size();
    let text_w = glyph_w.saturating_mul(len as u16);
    (
        display
            .width()
            .saturating_sub(text_w)
            .saturating_sub(CLOCK_MARGIN_RIGHT),
        display
            .height()
            .saturating_sub(glyph_h)
            .saturating_sub(CLOCK_MARGIN_BOTTOM),
    )
}

/// Everything a page needs, owned in one place
pub struct Station<B, C, S> {
    display: B,
    clock: C,
    sensors: S,
    logo: RawImage<'static>,
}

impl<B, C, S> Station<B, C, S>
where
    B: DisplayBackend,
    C: WallClock,
    S: WindSensors,
{
    pub fn new(display: B, clock: C, sensors: S, logo: RawImage<'static>) -> Self {
        Self {
            display,
            clock,
            sensors,
            logo,
        }
    }
}

impl<B, C, S> PageRenderer for Station<B, C, S>
where
    B: DisplayBackend,
    C: WallClock,
    S: WindSensors,
{
    type Error = RenderError;

    fn render(&mut self, page: Page) -> Result<(), RenderError> {
        render(
            page,
            &mut self.display,
            &mut self.clock,
            &mut self.sensors,
            &self.logo,
        )
    }

    fn shutdown(&mut self) {
        if let Err(_e) = self.display.cleanup() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display cleanup failed: {}", _e);
        }
    }
}
