use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::key::ItemId;
use crate::offset::{clamp_to_max, max_offset};
use crate::{
    GeometryError, GeometryIndex, ItemGeometry, ItemHeightFn, ItemIdFn, ItemsRendered,
    ListWindowOptions, NormalizedItem, ScrollDirection, ViewportState, VisibleRange,
};

/// Geometry and scroll state for a windowed list.
///
/// This type is intentionally UI-agnostic:
/// - It does not render anything or decide which rows are visible.
/// - Your adapter feeds it the measured viewport and the scroll offset reported by the list
///   engine.
/// - It answers layout questions (offsets, heights, maximum scroll offset) and enriches visible
///   ranges into [`ItemsRendered`] events.
///
/// For animated navigation, throttled visibility events and resize debouncing, see the
/// `listwindow-adapter` crate.
#[derive(Clone, Debug)]
pub struct ListWindow<T, K = usize> {
    options: ListWindowOptions<T, K>,
    geometry: GeometryIndex<K>,
    viewport: ViewportState,
    scroll_offset: f64,
    scroll_direction: Option<ScrollDirection>,
}

impl<T, K: ItemId> ListWindow<T, K> {
    /// Creates a list window and builds the geometry for `options.items`.
    pub fn new(options: ListWindowOptions<T, K>) -> Result<Self, GeometryError> {
        let geometry = build_geometry(&options)?;
        ldebug!(
            items = options.items.len(),
            overscan_count = options.overscan_count,
            "ListWindow::new"
        );
        Ok(Self {
            options,
            geometry,
            viewport: ViewportState::default(),
            scroll_offset: 0.0,
            scroll_direction: None,
        })
    }

    pub fn options(&self) -> &ListWindowOptions<T, K> {
        &self.options
    }

    /// Replaces the options.
    ///
    /// The geometry is rebuilt when the item collection, the id function or the height function
    /// changed identity. Returns whether a rebuild happened. On error nothing is replaced.
    pub fn set_options(&mut self, options: ListWindowOptions<T, K>) -> Result<bool, GeometryError> {
        let unchanged = Arc::ptr_eq(&self.options.items, &options.items)
            && Arc::ptr_eq(&self.options.get_item_height, &options.get_item_height)
            && Arc::ptr_eq(&self.options.get_item_id, &options.get_item_id);
        if unchanged {
            self.options = options;
            return Ok(false);
        }

        self.geometry = build_geometry(&options)?;
        self.options = options;
        ldebug!(items = self.options.items.len(), "ListWindow::set_options rebuilt geometry");
        Ok(true)
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ListWindowOptions<T, K>),
    ) -> Result<bool, GeometryError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Replaces the item collection and rebuilds the geometry.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> Result<(), GeometryError> {
        let items = items.into();
        self.update_options(|o| o.items = items).map(|_| ())
    }

    pub fn set_item_height(
        &mut self,
        f: impl Fn(&T, usize) -> f64 + Send + Sync + 'static,
    ) -> Result<(), GeometryError> {
        let f: ItemHeightFn<T> = Arc::new(f);
        self.update_options(|o| o.get_item_height = f).map(|_| ())
    }

    pub fn set_item_id(
        &mut self,
        f: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Result<(), GeometryError> {
        let f: ItemIdFn<T, K> = Arc::new(f);
        self.update_options(|o| o.get_item_id = f).map(|_| ())
    }

    /// Looks up an item and its geometry by id.
    pub fn normalized(&self, id: &K) -> Option<NormalizedItem<'_, T>> {
        let index = self.geometry.index_of(id)?;
        self.normalized_at(index)
    }

    pub fn offset_of(&self, id: &K) -> Option<f64> {
        self.geometry.get(id).map(|g| g.offset_top)
    }

    pub fn key_for(&self, index: usize) -> Option<K> {
        let item = self.options.items.get(index)?;
        Some((self.options.get_item_id)(item, index))
    }
}

impl<T, K> ListWindow<T, K> {
    pub fn items(&self) -> &[T] {
        &self.options.items
    }

    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.is_empty()
    }

    pub fn geometry(&self) -> &GeometryIndex<K> {
        &self.geometry
    }

    pub fn item_geometry(&self, index: usize) -> Option<ItemGeometry> {
        self.geometry.at(index)
    }

    pub fn normalized_at(&self, index: usize) -> Option<NormalizedItem<'_, T>> {
        let item = self.options.items.get(index)?;
        let geometry = self.geometry.at(index)?;
        Some(NormalizedItem::new(item, geometry))
    }

    pub fn overscan_count(&self) -> usize {
        self.options.overscan_count
    }

    pub fn set_overscan_count(&mut self, overscan_count: usize) {
        self.options.overscan_count = overscan_count;
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Sets the committed viewport. Returns `false` when it was already current.
    pub fn set_viewport(&mut self, viewport: ViewportState) -> bool {
        if self.viewport == viewport {
            return false;
        }
        ltrace!(
            width = viewport.width,
            height = viewport.height,
            "ListWindow::set_viewport"
        );
        self.viewport = viewport;
        true
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Records the current scroll offset.
    ///
    /// Returns the direction of the move, or `None` when the offset did not change.
    pub fn set_scroll_offset(&mut self, offset: f64) -> Option<ScrollDirection> {
        let direction = match offset.partial_cmp(&self.scroll_offset)? {
            Ordering::Greater => ScrollDirection::Forward,
            Ordering::Less => ScrollDirection::Backward,
            Ordering::Equal => return None,
        };
        self.scroll_offset = offset;
        self.scroll_direction = Some(direction);
        Some(direction)
    }

    pub fn total_height(&self) -> f64 {
        self.geometry.total_height()
    }

    pub fn max_scroll_offset(&self) -> f64 {
        max_offset(self.viewport.height, &self.geometry)
    }

    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        clamp_to_max(offset, self.max_scroll_offset())
    }

    pub fn index_at_offset(&self, offset: f64) -> Option<usize> {
        self.geometry.index_at_offset(offset)
    }

    /// Enriches a visible range reported by the list engine.
    ///
    /// Indices outside the collection are skipped, so an empty collection yields an empty event.
    pub fn items_rendered(&self, range: VisibleRange, was_programmatic: bool) -> ItemsRendered<'_, T> {
        let mut items = Vec::new();
        match range.clamp_to(self.len()) {
            Some((start, stop)) => {
                items.reserve(stop - start + 1);
                items.extend((start..=stop).filter_map(|i| self.normalized_at(i)));
            }
            None if range.start_index > range.stop_index => {
                lwarn!(
                    start = range.start_index,
                    stop = range.stop_index,
                    "items_rendered: inverted range"
                );
            }
            None => {}
        }

        let top = self.scroll_offset;
        let bottom = self.scroll_offset + self.viewport.height;
        let first_fully_visible = items.first().is_some_and(|it| it.offset_top >= top);
        let last_fully_visible = items.last().is_some_and(|it| it.end() <= bottom);

        ItemsRendered {
            range,
            items,
            scroll_offset: self.scroll_offset,
            viewport_height: self.viewport.height,
            was_programmatic,
            first_fully_visible,
            last_fully_visible,
        }
    }
}

fn build_geometry<T, K: ItemId>(
    options: &ListWindowOptions<T, K>,
) -> Result<GeometryIndex<K>, GeometryError> {
    let get_id = &options.get_item_id;
    let get_height = &options.get_item_height;
    GeometryIndex::build(&options.items, |item, i| get_id(item, i), |item, i| {
        get_height(item, i)
    })
}
