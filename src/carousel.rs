//! Sliding-window carousel state for the featured-games strip.
//!
//! The controller owns the filtered display list and a window position;
//! the renderer subscribes to `visible_slice` instead of doing index
//! arithmetic itself. Navigation moves the window by exactly one item per
//! call (a partial reveal, not a page jump) and clamps silently at the
//! ends so rapid clicking never glitches.

use crate::error::SiteError;
use log::debug;

/// Bounded sliding window over an ordered display list.
///
/// Invariant: `0 <= window_start <= max(0, len - page_size)`. When the
/// list is no longer than one page the window stays at 0 and navigation
/// is disabled in both directions.
#[derive(Debug, Clone)]
pub struct CarouselController<T> {
    items: Vec<T>,
    page_size: usize,
    window_start: usize,
}

impl<T> CarouselController<T> {
    /// Create a controller with the window at the start of the list.
    ///
    /// A page size of zero is a configuration error and is rejected here
    /// rather than clamped; every later operation assumes `page_size >= 1`.
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, SiteError> {
        if page_size == 0 {
            return Err(SiteError::InvalidPageSize(page_size));
        }
        Ok(CarouselController {
            items,
            page_size,
            window_start: 0,
        })
    }

    /// Largest legal `window_start` for the current list.
    fn max_start(&self) -> usize {
        self.items.len().saturating_sub(self.page_size)
    }

    pub fn can_go_prev(&self) -> bool {
        self.window_start > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.window_start < self.max_start()
    }

    /// Advance the window one item. No-op at the right edge.
    pub fn next(&mut self) {
        if self.can_go_next() {
            self.window_start = (self.window_start + 1).min(self.max_start());
            debug!("carousel next -> window_start {}", self.window_start);
        }
    }

    /// Move the window back one item. No-op at the left edge.
    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.window_start -= 1;
            debug!("carousel prev -> window_start {}", self.window_start);
        }
    }

    /// The currently visible items: always `min(len, page_size)` of them,
    /// starting at `window_start` (which is 0 whenever `len <= page_size`).
    pub fn visible_slice(&self) -> &[T] {
        let end = (self.window_start + self.page_size).min(self.items.len());
        &self.items[self.window_start..end]
    }

    pub fn window_start(&self) -> usize {
        self.window_start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
