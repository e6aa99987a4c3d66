//! Media gallery selection state for the game detail page.
//!
//! One controller per detail view, borrowing the game's media list from the
//! catalog. `next`/`prev` wrap circularly (last thumbnail chains back to the
//! first); direct `select` of a bad index is a caller bug and is rejected
//! rather than clamped.

use crate::catalog::{MediaItem, MediaKind};
use crate::error::SiteError;

/// Circular cursor over a game's media strip.
///
/// With no media there is no selection: `current()` and `selected_index()`
/// return `None` and navigation is a no-op. With media, `selected_index`
/// is always in `[0, len)`.
#[derive(Debug, Clone)]
pub struct MediaGalleryController<'a> {
    media: &'a [MediaItem],
    selected: usize,
}

impl<'a> MediaGalleryController<'a> {
    pub fn new(media: &'a [MediaItem]) -> Self {
        MediaGalleryController { media, selected: 0 }
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Index of the selected item, or `None` for an empty gallery.
    pub fn selected_index(&self) -> Option<usize> {
        if self.media.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// The selected item, or `None` for an empty gallery (the renderer
    /// shows its "No media available" placeholder).
    pub fn current(&self) -> Option<&'a MediaItem> {
        self.media.get(self.selected)
    }

    /// Kind of the selected item so the renderer can dispatch between
    /// plain images and iframe embeds. The controller itself never
    /// branches on this.
    pub fn current_kind(&self) -> Option<MediaKind> {
        self.current().map(|m| m.kind)
    }

    /// Jump straight to a thumbnail. Out-of-range indices leave the
    /// selection untouched and report the defect.
    pub fn select(&mut self, index: usize) -> Result<(), SiteError> {
        if index >= self.media.len() {
            return Err(SiteError::OutOfRange {
                index,
                len: self.media.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Step forward, wrapping from the last item to the first.
    pub fn next(&mut self) {
        if !self.media.is_empty() {
            self.selected = (self.selected + 1) % self.media.len();
        }
    }

    /// Step backward, wrapping from the first item to the last.
    pub fn prev(&mut self) {
        if !self.media.is_empty() {
            self.selected = (self.selected + self.media.len() - 1) % self.media.len();
        }
    }
}
