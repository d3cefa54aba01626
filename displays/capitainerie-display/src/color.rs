//! RGB565 palette

/// Pack 8-bit channels into RGB565
pub const fn color565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

pub const BLACK: u16 = color565(0, 0, 0);
pub const WHITE: u16 = color565(255, 255, 255);

/// Page title
pub const TITLE: u16 = color565(0, 150, 255);
/// Field labels
pub const LABEL: u16 = WHITE;
/// Measured values
pub const VALUE: u16 = color565(0, 255, 0);
/// Clock in the bottom-right corner
pub const CLOCK: u16 = color565(180, 220, 255);
