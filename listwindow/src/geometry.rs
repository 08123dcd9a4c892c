use alloc::vec::Vec;

use crate::key::{IdMap, ItemId};
use crate::{GeometryError, ItemGeometry};

/// Item id → layout lookup for an ordered collection.
///
/// Built in a single forward pass that accumulates a running offset, so for every pair of
/// neighbouring items `offset_top[i + 1] == offset_top[i] + height[i]` and the first item
/// starts at `0.0`.
///
/// The index is immutable. Reflect collection changes by building a new one.
///
/// Duplicate ids are a caller error. They do not fail the build: the *last* item carrying an id
/// wins the lookup, while every item still contributes its height to the offsets.
#[derive(Clone, Debug)]
pub struct GeometryIndex<K> {
    entries: Vec<ItemGeometry>,
    ids: IdMap<K>,
}

impl<K> Default for GeometryIndex<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdMap::new(),
        }
    }
}

impl<K: ItemId> GeometryIndex<K> {
    /// Builds the index for `items`.
    ///
    /// Heights must be finite and non-negative (zero-height rows are fine). Panics raised by
    /// `get_id` or `get_height` are not caught.
    pub fn build<T>(
        items: &[T],
        mut get_id: impl FnMut(&T, usize) -> K,
        mut get_height: impl FnMut(&T, usize) -> f64,
    ) -> Result<Self, GeometryError> {
        let mut entries = Vec::with_capacity(items.len());
        let mut ids = IdMap::new();
        let mut offset_top = 0.0f64;

        for (index, item) in items.iter().enumerate() {
            let id = get_id(item, index);
            let height = get_height(item, index);
            if !height.is_finite() {
                return Err(GeometryError::NonFiniteHeight { index });
            }
            if height < 0.0 {
                return Err(GeometryError::NegativeHeight { index, height });
            }

            if ids.insert(id, index).is_some() {
                lwarn!(index, "GeometryIndex::build: duplicate item id, later item wins");
            }
            entries.push(ItemGeometry {
                index,
                height,
                offset_top,
            });
            offset_top += height;
        }

        ldebug!(
            len = entries.len(),
            total_height = offset_top,
            "GeometryIndex::build"
        );
        Ok(Self { entries, ids })
    }

    pub fn get(&self, id: &K) -> Option<ItemGeometry> {
        self.index_of(id).map(|index| self.entries[index])
    }

    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.ids.get(id).copied()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains_key(id)
    }
}

impl<K> GeometryIndex<K> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<ItemGeometry> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[ItemGeometry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemGeometry> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct ids. Smaller than [`Self::len`] when ids collide.
    pub fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// End of the last item, or `0.0` for an empty index.
    pub fn total_height(&self) -> f64 {
        self.entries.last().map_or(0.0, ItemGeometry::end)
    }

    /// Returns the index of the item covering `offset`.
    ///
    /// Zero-height items never cover an offset. Offsets before the first item map to `0`, offsets
    /// past the end map to the last item.
    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let i = self.entries.partition_point(|e| e.end() <= offset);
        Some(i.min(self.entries.len() - 1))
    }
}
