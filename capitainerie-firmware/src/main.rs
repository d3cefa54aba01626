//! Capitainerie - Harbour Wind Station Firmware
//!
//! Main firmware binary for the RP2040 board at the harbour master's
//! office. Polls the RS-485 wind vane and anemometer and shows a two-page
//! slideshow (logo, live weather) on a 320x240 ILI9341 panel until the stop
//! button is pressed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART1;
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::{Delay, Timer};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ILI9341Rgb565;
use mipidsi::options::{ColorOrder, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use capitainerie_core::config::StationConfig;
use capitainerie_core::slideshow::{Slideshow, DEFAULT_PAGES};
use capitainerie_display::{GraphicsBackend, RawImage, Station};
use capitainerie_drivers::sensor::WindStation;
use capitainerie_drivers::transceiver::Rs485Transceiver;
use capitainerie_hal::uart::RS485_UART_CONFIG;
use capitainerie_hal_rp2040::{
    embassy_uart_config, BusUart, GpioInput, GpioOutput, RtcClock, StopButton,
};

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
    RTC_IRQ => embassy_rp::rtc::InterruptHandler;
});

/// Timing for the whole station
const STATION: StationConfig = StationConfig::DEFAULT;

/// Harbour logo, 240x240 big-endian RGB565
static LOGO_DATA: &[u8] = include_bytes!("../assets/logo.raw");
const LOGO_SIDE: u16 = 240;

/// Panel SPI clock
const DISPLAY_SPI_HZ: u32 = 40_000_000;

// Static cells for peripheral buffers (must live forever)
static BUS_TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static BUS_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static PANEL_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Capitainerie firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // RS-485 sensor bus on UART1 (TX GPIO8, RX GPIO9), driver enable on
    // GPIO10, held low (receive) from the first instruction
    let bus_uart = Uart::new_blocking(
        p.UART1,
        p.PIN_8,
        p.PIN_9,
        embassy_uart_config(&RS485_UART_CONFIG),
    );
    let bus_uart = bus_uart.into_buffered(
        Irqs,
        BUS_TX_BUF.init([0u8; 64]),
        BUS_RX_BUF.init([0u8; 256]),
    );
    let direction = GpioOutput::new(Output::new(p.PIN_10, Level::Low));
    let bus = Rs485Transceiver::new(BusUart::new(bus_uart), direction, Delay, STATION.bus);
    let sensors = WindStation::new(bus, STATION.query);

    info!(
        "RS-485 bus initialized ({} baud)",
        RS485_UART_CONFIG.baudrate
    );

    // ILI9341 on SPI1 (SCK GPIO14, MOSI GPIO15, CS GPIO13, DC GPIO12,
    // RST GPIO11), landscape
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_14, p.PIN_15, spi_config);
    let cs = Output::new(p.PIN_13, Level::High);
    let spi_device = unwrap!(ExclusiveDevice::new_no_delay(spi, cs));
    let dc = Output::new(p.PIN_12, Level::Low);
    let rst = Output::new(p.PIN_11, Level::High);
    let interface = SpiInterface::new(spi_device, dc, PANEL_BUF.init([0u8; 512]));

    let panel = match Builder::new(ILI9341Rgb565, interface)
        .reset_pin(rst)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .color_order(ColorOrder::Bgr)
        .init(&mut Delay)
    {
        Ok(panel) => panel,
        Err(_) => defmt::panic!("Display init failed"),
    };

    // Backlight on GPIO16
    let backlight = GpioOutput::new(Output::new(p.PIN_16, Level::Low));
    let display = GraphicsBackend::new(panel, &FONT_10X20, backlight);

    info!("Display initialized");

    let clock = unwrap!(RtcClock::new(Rtc::new(p.RTC, Irqs)));

    // Stop button on GPIO17, active low
    let mut stop = StopButton::new(GpioInput::new(Input::new(p.PIN_17, Pull::Up)));

    let logo = RawImage::new(LOGO_SIDE, LOGO_SIDE, LOGO_DATA);
    let mut station = Station::new(display, clock, sensors, logo);
    let mut slideshow = Slideshow::new(&DEFAULT_PAGES, STATION.slideshow);

    info!("Slideshow running");

    match slideshow.run(&mut station, &mut Delay, &mut stop) {
        Ok(()) => info!("Station halted, display off"),
        Err(e) => defmt::panic!("Render fault: {}", e),
    }

    // Nothing left to do; park the core
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
