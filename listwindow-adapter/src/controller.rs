use alloc::sync::Arc;

use listwindow::{
    GeometryError, ItemId, ListWindow, ListWindowOptions, ScrollDirection, ViewportState,
    VisibleRange,
};

use crate::{
    AnimationHandle, ControllerConfig, ControllerOptions, ListEngine, ResizeCoordinator,
    ScrollAnimationState, ScrollAnimator, StartOutcome, Throttle,
};

/// A raw visible-range notification waiting in the throttle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeChange {
    pub range: VisibleRange,
    /// The offset the list engine reported with this range.
    ///
    /// Enrichment does not read it: the event carries the list window's offset at emission time,
    /// which a later scroll or animation frame may have moved on.
    pub scroll_offset: f64,
    pub was_programmatic: bool,
}

/// What happened to a scroll-to request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    /// The controller was torn down, the id did not change, or it was cleared.
    Ignored,
    /// No item carries the id.
    UnknownId,
    /// The viewport already rests on the item; `on_scroll_to_finished` has fired.
    AlreadyThere,
    /// An animation began.
    Started,
    /// The running animation now heads for the new item.
    Retargeted,
}

/// A framework-neutral controller that wraps a [`ListWindow`] and coordinates the three
/// deferred pieces of a windowed list: scroll-to animation, throttled visibility events and
/// debounced viewport resizes.
///
/// This type does not hold any UI objects and never reads a clock. Adapters drive it by calling:
/// - `on_measure` when the size provider reports the available area
/// - `on_visible_range_change` / `on_list_scroll` when the list engine reports scrolling
/// - `set_scroll_to_id` when the caller asks to navigate
/// - `tick(now_ms)` on each frame/timer tick while [`Self::is_idle`] is false
///
/// The animation frame, the throttle window and the resize deferral are independent queues.
/// Each tick processes them in that order: resize commit, animation frame, throttle flush, so an
/// animation frame always clamps against the viewport committed in the same tick.
#[derive(Debug)]
pub struct Controller<T, K, E> {
    list: ListWindow<T, K>,
    engine: E,
    options: ControllerOptions<T>,
    animator: ScrollAnimator,
    animation: Option<AnimationHandle>,
    throttle: Throttle<RangeChange>,
    resize: ResizeCoordinator,
    target_id: Option<K>,
    torn_down: bool,
}

impl<T, K: ItemId, E: ListEngine> Controller<T, K, E> {
    pub fn new(
        list_options: ListWindowOptions<T, K>,
        options: ControllerOptions<T>,
        engine: E,
    ) -> Result<Self, GeometryError> {
        Ok(Self::from_list_window(
            ListWindow::new(list_options)?,
            options,
            engine,
        ))
    }

    pub fn from_list_window(list: ListWindow<T, K>, options: ControllerOptions<T>, engine: E) -> Self {
        let config = options.config;
        Self {
            resize: ResizeCoordinator::with_committed(list.viewport()),
            list,
            engine,
            animator: ScrollAnimator::new(config.scroll_duration_ms, config.easing),
            animation: None,
            throttle: Throttle::new(config.items_rendered_throttle_ms),
            options,
            target_id: None,
            torn_down: false,
        }
    }

    pub fn list_window(&self) -> &ListWindow<T, K> {
        &self.list
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn options(&self) -> &ControllerOptions<T> {
        &self.options
    }

    pub fn config(&self) -> ControllerConfig {
        self.options.config
    }

    /// Replaces timing and callbacks.
    ///
    /// A new duration applies to the running animation from the next tick on; a new throttle
    /// interval applies to the next window. Removing `on_items_rendered` drops a pending event.
    pub fn set_options(&mut self, options: ControllerOptions<T>) {
        self.animator.set_duration_ms(options.config.scroll_duration_ms);
        self.animator.set_easing(options.config.easing);
        self.throttle
            .set_wait_ms(options.config.items_rendered_throttle_ms);
        if options.on_items_rendered.is_none() {
            self.throttle.cancel();
        }
        self.options = options;
    }

    /// Replaces the list options, rebuilding the geometry when the items or the id/height
    /// functions changed identity. Later ticks use the new geometry.
    pub fn set_list_options(
        &mut self,
        list_options: ListWindowOptions<T, K>,
    ) -> Result<bool, GeometryError> {
        self.list.set_options(list_options)
    }

    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) -> Result<(), GeometryError> {
        self.list.set_items(items)
    }

    pub fn set_overscan_count(&mut self, overscan_count: usize) {
        self.list.set_overscan_count(overscan_count);
    }

    pub fn scroll_offset(&self) -> f64 {
        self.list.scroll_offset()
    }

    pub fn viewport(&self) -> ViewportState {
        self.list.viewport()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn animation_state(&self) -> ScrollAnimationState {
        self.animator.state()
    }

    /// The id most recently passed to [`Self::set_scroll_to_id`].
    pub fn scroll_to_id_target(&self) -> Option<&K> {
        self.target_id.as_ref()
    }

    /// Sets the navigation target. A request is issued only when the id changes to `Some`.
    pub fn set_scroll_to_id(&mut self, id: Option<K>, now_ms: u64) -> ScrollRequest {
        if self.torn_down || self.target_id == id {
            return ScrollRequest::Ignored;
        }
        let request = match &id {
            Some(id) => self.scroll_to_id(id, now_ms),
            None => ScrollRequest::Ignored,
        };
        self.target_id = id;
        request
    }

    /// Animates towards the item carrying `id`, even if it is the current target.
    ///
    /// An unknown id is not an error: nothing happens and no callback fires.
    pub fn scroll_to_id(&mut self, id: &K, now_ms: u64) -> ScrollRequest {
        if self.torn_down {
            return ScrollRequest::Ignored;
        }
        let Some(target) = self.list.offset_of(id) else {
            adebug!("scroll_to_id: unknown id");
            return ScrollRequest::UnknownId;
        };

        match self.animator.start(self.list.scroll_offset(), target, now_ms) {
            StartOutcome::AlreadyThere => {
                self.notify_scroll_finished();
                ScrollRequest::AlreadyThere
            }
            StartOutcome::Started(handle) => {
                self.animation = Some(handle);
                ScrollRequest::Started
            }
            StartOutcome::Retargeted(_) => ScrollRequest::Retargeted,
        }
    }

    /// Moves to the item carrying `id` at once, cancelling any animation.
    ///
    /// Returns the applied (clamped) offset, or `None` for an unknown id.
    pub fn jump_to_id(&mut self, id: &K) -> Option<f64> {
        if self.torn_down {
            return None;
        }
        let target = self.list.offset_of(id)?;
        Some(self.scroll_to_offset(target))
    }

    /// Moves to `offset` at once, cancelling any animation.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        if self.torn_down {
            return self.list.scroll_offset();
        }
        self.cancel_animation();
        let offset = self.list.clamp_scroll_offset(offset);
        self.engine.scroll_to(offset);
        self.list.set_scroll_offset(offset);
        offset
    }

    /// Cancels the running animation without firing `on_scroll_to_finished`.
    pub fn cancel_animation(&mut self) -> bool {
        match self.animation.take() {
            Some(handle) => self.animator.cancel(handle),
            None => false,
        }
    }

    /// Size provider notification. Committed on the next tick if it changed.
    pub fn on_measure(&mut self, width: f64, height: f64) {
        if self.torn_down {
            return;
        }
        self.resize.on_measure(width, height);
    }

    /// List engine notification that the visible rows changed.
    ///
    /// Both indices are inclusive and may lie outside the collection.
    pub fn on_visible_range_change(
        &mut self,
        start_index: usize,
        stop_index: usize,
        scroll_offset: f64,
        was_programmatic: bool,
        now_ms: u64,
    ) {
        if self.torn_down {
            return;
        }
        self.list.set_scroll_offset(scroll_offset);
        if self.options.on_items_rendered.is_none() {
            return;
        }
        self.throttle.call(
            RangeChange {
                range: VisibleRange::new(start_index, stop_index),
                scroll_offset,
                was_programmatic,
            },
            now_ms,
        );
    }

    /// List engine notification that the viewport scrolled.
    pub fn on_list_scroll(&mut self, offset: f64, was_programmatic: bool) {
        if self.torn_down {
            return;
        }
        let direction = self
            .list
            .set_scroll_offset(offset)
            .or(self.list.scroll_direction())
            .unwrap_or(ScrollDirection::Forward);
        if let Some(cb) = &self.options.on_scroll {
            cb(direction, offset, was_programmatic);
        }
    }

    /// Advances every pending queue to `now_ms`.
    ///
    /// Returns the offset pushed to the list engine when an animation frame ran.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if self.torn_down {
            return None;
        }
        self.flush_resize();
        let offset = self.step_animation(now_ms);
        self.flush_items_rendered(now_ms);
        offset
    }

    /// An animation frame is wanted on the next tick.
    pub fn wants_frame(&self) -> bool {
        !self.torn_down && self.animator.is_running()
    }

    /// When the pending `on_items_rendered` event becomes due.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if self.torn_down {
            return None;
        }
        self.throttle.deadline_ms()
    }

    pub fn has_pending_resize(&self) -> bool {
        !self.torn_down && self.resize.has_pending()
    }

    /// No queue holds work; the host may stop ticking.
    pub fn is_idle(&self) -> bool {
        !self.wants_frame() && self.next_deadline_ms().is_none() && !self.has_pending_resize()
    }

    /// Cancels the animation, the throttle window and the resize deferral.
    ///
    /// Pending work is dropped, not flushed. Afterwards every entry point is a no-op and no
    /// callback fires.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_animation();
        self.throttle.cancel();
        self.resize.cancel();
        self.torn_down = true;
        adebug!("Controller::teardown");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn into_parts(self) -> (ListWindow<T, K>, E) {
        (self.list, self.engine)
    }

    fn flush_resize(&mut self) {
        let Some(viewport) = self.resize.flush() else {
            return;
        };
        self.list.set_viewport(viewport);
        self.engine.reset_cached_sizes(0);
        if let Some(cb) = &self.options.on_size_update {
            cb(viewport.width, viewport.height);
        }
    }

    fn step_animation(&mut self, now_ms: u64) -> Option<f64> {
        let frame = self.animator.tick(now_ms, self.list.max_scroll_offset())?;
        self.engine.scroll_to(frame.offset);
        self.list.set_scroll_offset(frame.offset);
        if frame.finished {
            self.animation = None;
            self.notify_scroll_finished();
        }
        Some(frame.offset)
    }

    fn flush_items_rendered(&mut self, now_ms: u64) {
        let Some(change) = self.throttle.poll(now_ms) else {
            return;
        };
        let Some(cb) = &self.options.on_items_rendered else {
            return;
        };
        let event = self.list.items_rendered(change.range, change.was_programmatic);
        atrace!(
            start = change.range.start_index,
            stop = change.range.stop_index,
            items = event.items.len(),
            "on_items_rendered"
        );
        cb(&event);
    }

    fn notify_scroll_finished(&self) {
        if let Some(cb) = &self.options.on_scroll_to_finished {
            cb();
        }
    }
}
