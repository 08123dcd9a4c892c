use alloc::sync::Arc;

use listwindow::{ItemsRendered, ScrollDirection};

use crate::Easing;

/// Fired for every scroll the list engine reports: `(direction, offset, was_programmatic)`.
pub type OnScrollCallback = Arc<dyn Fn(ScrollDirection, f64, bool) + Send + Sync>;

/// Fired once per completed scroll-to request.
pub type OnScrollToFinishedCallback = Arc<dyn Fn() + Send + Sync>;

/// Receives throttled visibility events.
pub type OnItemsRenderedCallback<T> = Arc<dyn Fn(&ItemsRendered<'_, T>) + Send + Sync>;

/// Fired with `(width, height)` after a viewport size change was committed.
pub type OnSizeUpdateCallback = Arc<dyn Fn(f64, f64) + Send + Sync>;

/// Plain-data timing configuration for [`crate::Controller`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields take
/// their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ControllerConfig {
    /// Duration of a scroll-to animation.
    pub scroll_duration_ms: u64,
    /// Minimum spacing between two `on_items_rendered` events.
    pub items_rendered_throttle_ms: u64,
    pub easing: Easing,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: 200,
            items_rendered_throttle_ms: 200,
            easing: Easing::EaseInOutQuint,
        }
    }
}

/// Configuration plus observer callbacks for [`crate::Controller`].
///
/// Every callback is optional. Without `on_items_rendered` the controller skips throttling and
/// enrichment entirely.
pub struct ControllerOptions<T> {
    pub config: ControllerConfig,
    pub on_scroll: Option<OnScrollCallback>,
    pub on_scroll_to_finished: Option<OnScrollToFinishedCallback>,
    pub on_items_rendered: Option<OnItemsRenderedCallback<T>>,
    pub on_size_update: Option<OnSizeUpdateCallback>,
}

impl<T> Default for ControllerOptions<T> {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl<T> Clone for ControllerOptions<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            on_scroll: self.on_scroll.clone(),
            on_scroll_to_finished: self.on_scroll_to_finished.clone(),
            on_items_rendered: self.on_items_rendered.clone(),
            on_size_update: self.on_size_update.clone(),
        }
    }
}

impl<T> ControllerOptions<T> {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            on_scroll: None,
            on_scroll_to_finished: None,
            on_items_rendered: None,
            on_size_update: None,
        }
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_scroll_duration_ms(mut self, duration_ms: u64) -> Self {
        self.config.scroll_duration_ms = duration_ms;
        self
    }

    pub fn with_items_rendered_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.config.items_rendered_throttle_ms = throttle_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.config.easing = easing;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollDirection, f64, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll_to_finished(
        mut self,
        on_scroll_to_finished: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll_to_finished = on_scroll_to_finished.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_items_rendered(
        mut self,
        on_items_rendered: Option<impl Fn(&ItemsRendered<'_, T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_items_rendered = on_items_rendered.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_size_update(
        mut self,
        on_size_update: Option<impl Fn(f64, f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_size_update = on_size_update.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> core::fmt::Debug for ControllerOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ControllerOptions")
            .field("config", &self.config)
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_scroll_to_finished", &self.on_scroll_to_finished.is_some())
            .field("on_items_rendered", &self.on_items_rendered.is_some())
            .field("on_size_update", &self.on_size_update.is_some())
            .finish()
    }
}
