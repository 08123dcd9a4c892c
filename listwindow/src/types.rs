use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Layout of a single item along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub index: usize,
    pub height: f64,
    /// Sum of the heights of every item before this one.
    pub offset_top: f64,
}

impl ItemGeometry {
    pub fn end(&self) -> f64 {
        self.offset_top + self.height
    }
}

/// An item joined with its geometry.
pub struct NormalizedItem<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub height: f64,
    pub offset_top: f64,
}

impl<'a, T> NormalizedItem<'a, T> {
    pub(crate) fn new(item: &'a T, geometry: ItemGeometry) -> Self {
        Self {
            item,
            index: geometry.index,
            height: geometry.height,
            offset_top: geometry.offset_top,
        }
    }

    pub fn end(&self) -> f64 {
        self.offset_top + self.height
    }

    pub fn geometry(&self) -> ItemGeometry {
        ItemGeometry {
            index: self.index,
            height: self.height,
            offset_top: self.offset_top,
        }
    }
}

impl<T> Clone for NormalizedItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NormalizedItem<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NormalizedItem<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedItem")
            .field("item", self.item)
            .field("index", &self.index)
            .field("height", &self.height)
            .field("offset_top", &self.offset_top)
            .finish()
    }
}

/// Indices reported visible by the list engine. Both ends are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub stop_index: usize,
}

impl VisibleRange {
    pub fn new(start_index: usize, stop_index: usize) -> Self {
        Self {
            start_index,
            stop_index,
        }
    }

    /// Intersects the range with `0..len`.
    ///
    /// Returns `None` when nothing of the range lies inside the collection.
    pub fn clamp_to(&self, len: usize) -> Option<(usize, usize)> {
        if len == 0 || self.start_index > self.stop_index || self.start_index >= len {
            return None;
        }
        Some((self.start_index, self.stop_index.min(len - 1)))
    }
}
