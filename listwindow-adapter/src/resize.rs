use listwindow::ViewportState;

/// Debounces size-provider measurements into settled viewport commits.
///
/// A measurement is parked in a single deferred slot (a newer one replaces it) and acted upon by
/// [`Self::flush`] on the next tick, and only when it differs from the committed viewport. Bursts
/// of identical or bouncing measurements within a tick therefore cost at most one commit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeCoordinator {
    committed: ViewportState,
    pending: Option<ViewportState>,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a viewport that is already in effect, so re-measuring it is not a change.
    pub fn with_committed(committed: ViewportState) -> Self {
        Self {
            committed,
            pending: None,
        }
    }

    pub fn committed(&self) -> ViewportState {
        self.committed
    }

    pub fn pending(&self) -> Option<ViewportState> {
        self.pending
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Parks a measurement for the next flush.
    ///
    /// Non-finite sizes are ignored and leave any earlier pending measurement in place.
    pub fn on_measure(&mut self, width: f64, height: f64) {
        if !width.is_finite() || !height.is_finite() {
            adebug!(width, height, "ResizeCoordinator: non-finite measurement ignored");
            return;
        }
        self.pending = Some(ViewportState::new(width, height));
    }

    /// Commits the pending measurement.
    ///
    /// Returns the new viewport, or `None` when nothing was pending or it equals the committed
    /// one.
    pub fn flush(&mut self) -> Option<ViewportState> {
        let next = self.pending.take()?;
        if next == self.committed {
            atrace!(
                width = next.width,
                height = next.height,
                "ResizeCoordinator: unchanged"
            );
            return None;
        }
        adebug!(
            width = next.width,
            height = next.height,
            "ResizeCoordinator: commit"
        );
        self.committed = next;
        Some(next)
    }

    /// Drops the pending measurement.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
