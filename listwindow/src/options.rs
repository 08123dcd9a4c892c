use alloc::sync::Arc;
use alloc::vec::Vec;

/// Returns the height of an item along the scroll axis.
pub type ItemHeightFn<T> = Arc<dyn Fn(&T, usize) -> f64 + Send + Sync>;

/// Returns the identity of an item.
pub type ItemIdFn<T, K> = Arc<dyn Fn(&T, usize) -> K + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: the collection and both closures live in `Arc`s. The list window compares
/// them by pointer identity (`Arc::ptr_eq`) and only rebuilds its geometry when one of them is
/// replaced, so keep reusing the same `Arc` for an unchanged collection or function.
pub struct ListWindowOptions<T, K = usize> {
    pub items: Arc<[T]>,
    pub get_item_height: ItemHeightFn<T>,
    pub get_item_id: ItemIdFn<T, K>,
    /// Rows rendered beyond the visible window. Passed through to the list engine.
    pub overscan_count: usize,
}

impl<T, K> Clone for ListWindowOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            get_item_height: Arc::clone(&self.get_item_height),
            get_item_id: Arc::clone(&self.get_item_id),
            overscan_count: self.overscan_count,
        }
    }
}

impl<T> ListWindowOptions<T, usize> {
    /// Creates options for a list keyed by index.
    pub fn new(get_item_height: impl Fn(&T, usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::new_with_id(get_item_height, |_, i| i)
    }
}

impl<T, K> ListWindowOptions<T, K> {
    /// Creates options with a custom id mapping and no items.
    ///
    /// `get_item_id(item, i)` should return a stable identity; scroll-to requests are resolved
    /// through it.
    pub fn new_with_id(
        get_item_height: impl Fn(&T, usize) -> f64 + Send + Sync + 'static,
        get_item_id: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: Vec::<T>::new().into(),
            get_item_height: Arc::new(get_item_height),
            get_item_id: Arc::new(get_item_id),
            overscan_count: 1,
        }
    }

    pub fn with_items(mut self, items: impl Into<Arc<[T]>>) -> Self {
        self.items = items.into();
        self
    }

    pub fn with_item_height(
        mut self,
        get_item_height: impl Fn(&T, usize) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.get_item_height = Arc::new(get_item_height);
        self
    }

    pub fn with_item_id(
        mut self,
        get_item_id: impl Fn(&T, usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_item_id = Arc::new(get_item_id);
        self
    }

    pub fn with_overscan_count(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }
}

impl<T, K> core::fmt::Debug for ListWindowOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListWindowOptions")
            .field("items", &self.items.len())
            .field("overscan_count", &self.overscan_count)
            .finish_non_exhaustive()
    }
}
