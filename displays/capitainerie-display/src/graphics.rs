//! `embedded-graphics` backend
//!
//! Adapts any RGB565 [`DrawTarget`] (a panel driver, a framebuffer) and a
//! backlight pin to [`DisplayBackend`]. Text is drawn with a monospaced
//! font, top-left anchored.

use capitainerie_hal::OutputPin;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayBackend, DisplayError, RawImage};
use crate::color::BLACK;

fn rgb(color: u16) -> Rgb565 {
    Rgb565::from(RawU16::new(color))
}

fn point(x: u16, y: u16) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

pub struct GraphicsBackend<T, BL> {
    target: T,
    font: &'static MonoFont<'static>,
    backlight: BL,
}

impl<T, BL> GraphicsBackend<T, BL>
where
    T: DrawTarget<Color = Rgb565>,
    BL: OutputPin,
{
    /// Wrap a draw target and switch the backlight on
    pub fn new(target: T, font: &'static MonoFont<'static>, mut backlight: BL) -> Self {
        backlight.set_high();
        Self {
            target,
            font,
            backlight,
        }
    }
}

impl<T, BL> DisplayBackend for GraphicsBackend<T, BL>
where
    T: DrawTarget<Color = Rgb565>,
    BL: OutputPin,
{
    fn clear(&mut self, color: u16) -> Result<(), DisplayError> {
        self.target
            .clear(rgb(color))
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: u16,
        background: u16,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(rgb(color))
            .background_color(rgb(background))
            .build();

        Text::with_baseline(text, point(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_image(&mut self, x: u16, y: u16, image: &RawImage<'_>) -> Result<(), DisplayError> {
        if !image.is_complete() {
            return Err(DisplayError::InvalidImage);
        }
        let raw: ImageRaw<'_, Rgb565> = ImageRaw::new(image.data(), u32::from(image.width()));

        Image::new(&raw, point(x, y))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn width(&self) -> u16 {
        self.target.bounding_box().size.width as u16
    }

    fn height(&self) -> u16 {
        self.target.bounding_box().size.height as u16
    }

    fn glyph_size(&self) -> (u16, u16) {
        let cell = self.font.character_size;
        (
            (cell.width + self.font.character_spacing) as u16,
            cell.height as u16,
        )
    }

    fn cleanup(&mut self) -> Result<(), DisplayError> {
        let cleared = self.clear(BLACK);
        // Backlight goes off even if the panel stopped answering
        self.backlight.set_low();
        cleared
    }
}
