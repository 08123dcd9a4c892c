//! A headless geometry core for windowed lists with variable item heights.
//!
//! For adapter-level utilities (scroll animation, throttled visibility events, resize
//! debouncing), see the `listwindow-adapter` crate.
//!
//! This crate focuses on the layout model a windowed list needs to stay consistent while items,
//! heights and the viewport change: an id → geometry index built with a running offset, the
//! maximum scroll offset, and enrichment of visible index ranges into observer events.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item collection plus height and id functions
//! - the viewport size
//! - the scroll offset and visible range reported by its list engine
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod key;
mod list_window;
mod offset;
mod options;
mod rendered;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::GeometryError;
pub use geometry::GeometryIndex;
pub use key::ItemId;
pub use list_window::ListWindow;
pub use offset::{clamp_offset, max_offset};
pub use options::{ItemHeightFn, ItemIdFn, ListWindowOptions};
pub use rendered::ItemsRendered;
pub use state::ViewportState;
pub use types::{ItemGeometry, NormalizedItem, ScrollDirection, VisibleRange};
