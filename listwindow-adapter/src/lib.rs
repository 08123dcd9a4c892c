//! Adapter utilities for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on the layout model. This crate provides the
//! small, framework-neutral runtime pieces a windowed list needs on top of it:
//!
//! - Eased, retargetable scroll-to animation ([`ScrollAnimator`])
//! - Trailing throttling of visibility events ([`Throttle`])
//! - Debounced viewport resizes ([`ResizeCoordinator`])
//! - A [`Controller`] wiring them to a [`ListEngine`] and observer callbacks
//!
//! Everything is adapter-driven: nothing here owns a timer or reads a clock. The host passes
//! `now_ms` and calls [`Controller::tick`] while work is pending.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animator;
mod controller;
mod easing;
mod engine;
mod options;
mod resize;
mod throttle;


pub use animator::{
    AnimationFrame, AnimationHandle, AnimationStep, ScrollAnimationState, ScrollAnimator,
    StartOutcome,
};
pub use controller::{Controller, RangeChange, ScrollRequest};
pub use easing::Easing;
pub use engine::ListEngine;
pub use options::{
    ControllerConfig, ControllerOptions, OnItemsRenderedCallback, OnScrollCallback,
    OnScrollToFinishedCallback, OnSizeUpdateCallback,
};
pub use resize::ResizeCoordinator;
pub use throttle::Throttle;
