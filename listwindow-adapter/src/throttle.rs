/// Trailing-only throttle over a single pending argument slot.
///
/// The first call after an emission opens a window of `wait_ms`. Calls inside the window replace
/// the pending arguments; when the window closes, [`Throttle::poll`] hands out the last ones.
/// Nothing is emitted on the leading edge, so a burst of calls inside one window produces exactly
/// one emission, carrying the last call's arguments.
///
/// Time is injected (`now_ms`); the host polls on its own tick.
#[derive(Clone, Debug)]
pub struct Throttle<A> {
    wait_ms: u64,
    pending: Option<A>,
    deadline_ms: Option<u64>,
    last_emit_ms: Option<u64>,
}

impl<A> Throttle<A> {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            pending: None,
            deadline_ms: None,
            last_emit_ms: None,
        }
    }

    pub fn wait_ms(&self) -> u64 {
        self.wait_ms
    }

    /// Applies to windows opened after this call.
    pub fn set_wait_ms(&mut self, wait_ms: u64) {
        self.wait_ms = wait_ms;
    }

    pub fn call(&mut self, args: A, now_ms: u64) {
        self.pending = Some(args);
        if self.deadline_ms.is_some() {
            return;
        }
        let opened_at = self.last_emit_ms.map_or(now_ms, |last| now_ms.max(last));
        let deadline = opened_at.saturating_add(self.wait_ms);
        atrace!(now_ms, deadline, "Throttle: window opened");
        self.deadline_ms = Some(deadline);
    }

    /// Emits the pending arguments once the window has closed.
    pub fn poll(&mut self, now_ms: u64) -> Option<A> {
        let deadline = self.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        self.deadline_ms = None;
        self.last_emit_ms = Some(now_ms);
        self.pending.take()
    }

    /// When the open window closes, if any.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn last_emit_ms(&self) -> Option<u64> {
        self.last_emit_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending arguments and closes the window without emitting.
    pub fn cancel(&mut self) -> bool {
        self.deadline_ms = None;
        self.pending.take().is_some()
    }
}
