//! Slideshow scheduling
//!
//! The station has no menus and no input besides a stop button: it shows a
//! fixed list of pages in order, each for a fixed dwell time, forever.
//!
//! ```text
//!        ┌──────────────────────────────────────────┐
//!        ▼                                          │
//!   ┌─────────┐  render  ┌─────────┐  dwell  ┌─────────────────┐
//!   │ boundary├─────────►│  page   ├────────►│ next page / wrap│
//!   └────┬────┘          └─────────┘         └─────────────────┘
//!        │ stop requested
//!        ▼
//!   ┌──────────────┐  cleanup (exactly once)
//!   │ ShuttingDown ├──────────────────────────►
//!   └──────────────┘
//! ```

pub mod machine;
pub mod page;
pub mod scheduler;
pub mod stop;

pub use machine::SlideshowState;
pub use page::{Page, PageCycle, DEFAULT_PAGES};
pub use scheduler::{PageRenderer, Slideshow};
pub use stop::{StopFlag, StopSignal};
