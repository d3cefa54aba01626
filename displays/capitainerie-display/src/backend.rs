//! Display backend trait
//!
//! Defines the interface the page renderer draws through.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Image data does not match its declared dimensions
    InvalidImage,
}

/// Raw big-endian RGB565 image
///
/// Two bytes per pixel, rows top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawImage<'a> {
    width: u16,
    height: u16,
    data: &'a [u8],
}

impl<'a> RawImage<'a> {
    pub const fn new(width: u16, height: u16, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Whether the data holds exactly `width * height` pixels
    pub const fn is_complete(&self) -> bool {
        self.data.len() == self.width as usize * self.height as usize * 2
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering to displays.
/// Coordinates are pixels from the top-left corner; colours are RGB565
/// values (see [`crate::color565`]).
pub trait DisplayBackend {
    /// Fill the entire display with `color`
    fn clear(&mut self, color: u16) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// Each glyph cell is filled with `background`.
    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: u16,
        background: u16,
    ) -> Result<(), DisplayError>;

    /// Draw a raw image with its top-left corner at (`x`, `y`)
    fn draw_image(&mut self, x: u16, y: u16, image: &RawImage<'_>) -> Result<(), DisplayError>;

    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Glyph cell (width, height) in pixels, spacing included
    fn glyph_size(&self) -> (u16, u16);

    /// Blank the panel and switch it off
    fn cleanup(&mut self) -> Result<(), DisplayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_image_completeness() {
        let data = [0u8; 8];
        assert!(RawImage::new(2, 2, &data).is_complete());
        assert!(!RawImage::new(3, 2, &data).is_complete());
        assert!(!RawImage::new(2, 2, &data[..7]).is_complete());
    }
}
