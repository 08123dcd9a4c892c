use alloc::vec::Vec;
use core::fmt;

use crate::{NormalizedItem, VisibleRange};

/// Payload delivered to visibility observers.
///
/// Built from a [`VisibleRange`] reported by the list engine, against the geometry and scroll
/// offset current when the event is emitted.
pub struct ItemsRendered<'a, T> {
    /// The range as reported, possibly reaching past the collection.
    pub range: VisibleRange,
    /// One entry per in-bounds index of `range`, in index order.
    pub items: Vec<NormalizedItem<'a, T>>,
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Whether the scroll that produced the range was requested by the engine itself.
    pub was_programmatic: bool,
    /// The first item starts at or below the top edge of the viewport.
    pub first_fully_visible: bool,
    /// The last item ends at or above the bottom edge of the viewport.
    pub last_fully_visible: bool,
}

impl<'a, T> ItemsRendered<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&NormalizedItem<'a, T>> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&NormalizedItem<'a, T>> {
        self.items.last()
    }

    /// Whether `item` lies entirely inside the viewport.
    pub fn is_fully_visible(&self, item: &NormalizedItem<'_, T>) -> bool {
        item.offset_top >= self.scroll_offset
            && item.end() <= self.scroll_offset + self.viewport_height
    }
}

impl<T: fmt::Debug> fmt::Debug for ItemsRendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemsRendered")
            .field("range", &self.range)
            .field("items", &self.items)
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_height", &self.viewport_height)
            .field("was_programmatic", &self.was_programmatic)
            .field("first_fully_visible", &self.first_fully_visible)
            .field("last_fully_visible", &self.last_fully_visible)
            .finish()
    }
}
