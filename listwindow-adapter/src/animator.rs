use crate::Easing;

/// State of a single scroll animation.
///
/// The animator never hides this in shared mutable storage: [`ScrollAnimationState::step`]
/// takes the state by value and hands back the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimationState {
    pub active: bool,
    pub initial_offset: f64,
    pub final_offset: f64,
    pub start_ms: Option<u64>,
}

/// Result of advancing a [`ScrollAnimationState`] by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStep {
    /// Nothing was running.
    Idle(ScrollAnimationState),
    /// Another tick is needed.
    Running {
        state: ScrollAnimationState,
        offset: f64,
    },
    /// The duration elapsed; `state` is idle again.
    Finished {
        state: ScrollAnimationState,
        offset: f64,
    },
}

impl ScrollAnimationState {
    /// An idle state resting at `offset`.
    pub fn idle(offset: f64) -> Self {
        Self {
            active: false,
            initial_offset: offset,
            final_offset: offset,
            start_ms: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active && self.start_ms.is_some()
    }

    /// Normalized time in `[0, 1]`. A zero duration is always complete.
    pub fn progress(&self, now_ms: u64, duration_ms: u64) -> f64 {
        let Some(start_ms) = self.start_ms else {
            return 0.0;
        };
        if duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(start_ms);
        (elapsed as f64 / duration_ms as f64).min(1.0)
    }

    /// Advances the animation to `now_ms`.
    ///
    /// The sampled offset is clamped to `[0, max_offset]`; pass the maximum current at this
    /// tick so a viewport resize mid-animation is honoured.
    pub fn step(
        self,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
        max_offset: f64,
    ) -> AnimationStep {
        let Some(start_ms) = self.start_ms.filter(|_| self.active) else {
            return AnimationStep::Idle(self);
        };

        let eased = easing.sample(self.progress(now_ms, duration_ms));
        let offset = self.initial_offset + (self.final_offset - self.initial_offset) * eased;
        let offset = offset.max(0.0).min(max_offset.max(0.0));

        if now_ms.saturating_sub(start_ms) < duration_ms {
            return AnimationStep::Running {
                state: self,
                offset,
            };
        }
        AnimationStep::Finished {
            state: Self {
                active: false,
                initial_offset: offset,
                final_offset: self.final_offset,
                start_ms: None,
            },
            offset,
        }
    }
}

/// Identifies one animation started by a [`ScrollAnimator`].
///
/// Retargeting keeps the handle; a new animation after the previous one ended gets a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// What [`ScrollAnimator::start`] did with a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The target equals the current offset; nothing was scheduled and the request is complete.
    AlreadyThere,
    /// A new animation began.
    Started(AnimationHandle),
    /// A running animation now heads for the new target, keeping its start and progress.
    Retargeted(AnimationHandle),
}

/// An offset produced by [`ScrollAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub offset: f64,
    /// This was the last frame of the animation.
    pub finished: bool,
}

/// Time-based eased scrolling towards a target offset, one animation at a time.
///
/// The animator is adapter-driven: it never schedules anything on its own. While
/// [`Self::is_running`] is true the host calls [`Self::tick`] once per frame.
#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    state: ScrollAnimationState,
    duration_ms: u64,
    easing: Easing,
    generation: u64,
    /// Offset of the most recent frame, or the start offset before the first one.
    last_offset: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(200, Easing::default())
    }
}

impl ScrollAnimator {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            state: ScrollAnimationState::default(),
            duration_ms,
            easing,
            generation: 0,
            last_offset: 0.0,
        }
    }

    pub fn state(&self) -> ScrollAnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Handle of the running animation, if any.
    pub fn handle(&self) -> Option<AnimationHandle> {
        self.is_running().then_some(AnimationHandle(self.generation))
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Takes effect on the next tick, including for a running animation.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Requests a scroll from `current_offset` to `target`.
    ///
    /// While running only the target is replaced: the start offset and start time stay, so the
    /// motion continues from its current progress instead of jumping.
    pub fn start(&mut self, current_offset: f64, target: f64, now_ms: u64) -> StartOutcome {
        if self.is_running() {
            atrace!(target, "ScrollAnimator: retarget");
            self.state.final_offset = target;
            return StartOutcome::Retargeted(AnimationHandle(self.generation));
        }

        if target == current_offset {
            self.state = ScrollAnimationState::idle(current_offset);
            self.last_offset = current_offset;
            return StartOutcome::AlreadyThere;
        }

        self.generation = self.generation.wrapping_add(1);
        self.state = ScrollAnimationState {
            active: true,
            initial_offset: current_offset,
            final_offset: target,
            start_ms: Some(now_ms),
        };
        self.last_offset = current_offset;
        adebug!(
            from = current_offset,
            to = target,
            duration_ms = self.duration_ms,
            "ScrollAnimator: start"
        );
        StartOutcome::Started(AnimationHandle(self.generation))
    }

    /// Advances the running animation. Returns `None` when idle.
    pub fn tick(&mut self, now_ms: u64, max_offset: f64) -> Option<AnimationFrame> {
        match self
            .state
            .step(now_ms, self.duration_ms, self.easing, max_offset)
        {
            AnimationStep::Idle(_) => None,
            AnimationStep::Running { state, offset } => {
                self.state = state;
                self.last_offset = offset;
                atrace!(now_ms, offset, "ScrollAnimator: frame");
                Some(AnimationFrame {
                    offset,
                    finished: false,
                })
            }
            AnimationStep::Finished { state, offset } => {
                self.state = state;
                self.last_offset = offset;
                adebug!(now_ms, offset, "ScrollAnimator: finished");
                Some(AnimationFrame {
                    offset,
                    finished: true,
                })
            }
        }
    }

    /// Cancels the animation `handle` was issued for.
    ///
    /// Returns `false` for a stale handle (the animation already ended or was replaced).
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        if self.handle() != Some(handle) {
            return false;
        }
        self.cancel_all()
    }

    /// Cancels whatever is running. A cancelled animation never produces a finished frame.
    ///
    /// The state comes to rest at the offset of the last frame handed out, which is where the
    /// list engine was left.
    pub fn cancel_all(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        adebug!(offset = self.last_offset, "ScrollAnimator: cancelled");
        self.state = ScrollAnimationState::idle(self.last_offset);
        true
    }
}
