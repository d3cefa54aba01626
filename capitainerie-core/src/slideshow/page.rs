//! Page model

/// A slideshow page
///
/// Pages carry no state: every render recomputes its content from live
/// sensor reads and the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Harbour logo on a white background
    Logo,
    /// Wind speed, wind direction and local time
    WeatherSummary,
}

/// The station's page order
pub const DEFAULT_PAGES: [Page; 2] = [Page::Logo, Page::WeatherSummary];

/// Endless iterator over a page list, wrapping to the first page after the
/// last
///
/// Yields nothing for an empty list.
#[derive(Debug, Clone)]
pub struct PageCycle<'a> {
    pages: &'a [Page],
    next: usize,
}

impl<'a> PageCycle<'a> {
    pub const fn new(pages: &'a [Page]) -> Self {
        Self { pages, next: 0 }
    }

    /// Index of the page the next call to `next` returns
    pub fn position(&self) -> usize {
        self.next
    }
}

impl Iterator for PageCycle<'_> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let page = *self.pages.get(self.next)?;
        self.next = (self.next + 1) % self.pages.len();
        Some(page)
    }
}
