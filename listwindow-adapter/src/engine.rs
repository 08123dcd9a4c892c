use alloc::boxed::Box;

/// The windowing collaborator that actually lays out and renders rows.
///
/// The controller only drives it imperatively; the engine reports back through
/// [`crate::Controller::on_visible_range_change`] and [`crate::Controller::on_list_scroll`].
pub trait ListEngine {
    /// Moves the viewport to `offset`.
    fn scroll_to(&mut self, offset: f64);

    /// Drops every cached row size from `from_index` on, forcing re-measurement.
    fn reset_cached_sizes(&mut self, from_index: usize);
}

impl<E: ListEngine + ?Sized> ListEngine for &mut E {
    fn scroll_to(&mut self, offset: f64) {
        (**self).scroll_to(offset);
    }

    fn reset_cached_sizes(&mut self, from_index: usize) {
        (**self).reset_cached_sizes(from_index);
    }
}

impl<E: ListEngine + ?Sized> ListEngine for Box<E> {
    fn scroll_to(&mut self, offset: f64) {
        (**self).scroll_to(offset);
    }

    fn reset_cached_sizes(&mut self, from_index: usize) {
        (**self).reset_cached_sizes(from_index);
    }
}
