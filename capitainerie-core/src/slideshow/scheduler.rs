//! Slideshow scheduler loop
//!
//! Single-threaded and blocking: each page render runs to completion, then
//! the loop sleeps for the dwell time. All waits go through an
//! `embedded_hal::delay::DelayNs`, so the firmware passes a hardware timer
//! delay and tests pass a recorder.

use embedded_hal::delay::DelayNs;

use super::machine::SlideshowState;
use super::page::{Page, PageCycle, DEFAULT_PAGES};
use super::stop::StopSignal;
use crate::config::SlideshowConfig;

/// Something that can put a page on screen
pub trait PageRenderer {
    /// Error raised by a failed draw; fatal to the slideshow
    type Error;

    /// Draw `page` completely
    fn render(&mut self, page: Page) -> Result<(), Self::Error>;

    /// Release the display; called exactly once when the slideshow ends
    fn shutdown(&mut self);
}

impl<T: PageRenderer + ?Sized> PageRenderer for &mut T {
    type Error = T::Error;

    fn render(&mut self, page: Page) -> Result<(), Self::Error> {
        (**self).render(page)
    }

    fn shutdown(&mut self) {
        (**self).shutdown()
    }
}

/// Runs the renderer's shutdown hook when dropped
///
/// Every exit from [`Slideshow::run`] (stop, render error, unwinding panic
/// on host) goes through this drop, so cleanup happens exactly once.
struct ShutdownGuard<'a, R: PageRenderer> {
    renderer: &'a mut R,
}

impl<'a, R: PageRenderer> ShutdownGuard<'a, R> {
    fn new(renderer: &'a mut R) -> Self {
        Self { renderer }
    }
}

impl<R: PageRenderer> Drop for ShutdownGuard<'_, R> {
    fn drop(&mut self) {
        self.renderer.shutdown();
    }
}

/// Page scheduler
pub struct Slideshow<'p> {
    pages: &'p [Page],
    config: SlideshowConfig,
    state: SlideshowState,
    pages_rendered: u32,
}

impl Slideshow<'static> {
    /// Logo then weather summary, 5 s each
    pub const fn station() -> Self {
        Self::new(&DEFAULT_PAGES, SlideshowConfig::DEFAULT)
    }
}

impl<'p> Slideshow<'p> {
    pub const fn new(pages: &'p [Page], config: SlideshowConfig) -> Self {
        Self {
            pages,
            config,
            state: SlideshowState::Idle,
            pages_rendered: 0,
        }
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    /// Number of completed page renders since construction
    pub fn pages_rendered(&self) -> u32 {
        self.pages_rendered
    }

    /// Cycle through the pages until `stop` fires
    ///
    /// Returns `Ok(())` after an operator stop, or the first render error.
    /// In both cases `renderer.shutdown()` has been called exactly once
    /// before this returns.
    pub fn run<R, D, S>(
        &mut self,
        renderer: &mut R,
        delay: &mut D,
        stop: &mut S,
    ) -> Result<(), R::Error>
    where
        R: PageRenderer,
        D: DelayNs,
        S: StopSignal,
    {
        let guard = ShutdownGuard::new(renderer);
        let mut cycle = PageCycle::new(self.pages);
        self.state = self.state.start();

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Slideshow started: {} pages, {}ms dwell",
            self.pages.len(),
            self.config.dwell_ms
        );

        loop {
            if stop.poll() {
                break;
            }

            if let Some(page) = cycle.next() {
                #[cfg(feature = "defmt")]
                defmt::trace!("Rendering {}", page);

                if let Err(e) = guard.renderer.render(page) {
                    #[cfg(feature = "defmt")]
                    defmt::error!("Render of {} failed, shutting down", page);
                    self.state = self.state.stop();
                    return Err(e);
                }
                self.pages_rendered = self.pages_rendered.wrapping_add(1);
            }

            if self.dwell(delay, stop) {
                break;
            }
        }

        self.state = self.state.stop();

        #[cfg(feature = "defmt")]
        defmt::info!("Slideshow stopped after {} pages", self.pages_rendered);

        drop(guard);
        Ok(())
    }

    /// Sleep for the dwell time, sampling `stop` between slices
    ///
    /// Returns `true` if a stop was seen; the remaining dwell is skipped.
    fn dwell<D: DelayNs, S: StopSignal>(&self, delay: &mut D, stop: &mut S) -> bool {
        let slice = self.config.stop_poll_ms.max(1);
        let mut remaining = self.config.dwell_ms;

        while remaining > 0 {
            let step = remaining.min(slice);
            delay.delay_ms(step);
            remaining -= step;

            if stop.poll() {
                return true;
            }
        }

        false
    }
}
