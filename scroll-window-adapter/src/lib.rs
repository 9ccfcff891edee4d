//! A framework-neutral windowed list view built on the `scroll-window` engine.
//!
//! The `scroll-window` crate provides the per-sample math. This crate wires it into the
//! workflow a list adapter needs:
//!
//! - one [`WindowedListView`] per mounted list, owning its own scroll state
//! - a one-shot "reached bottom" notification for infinite loading
//! - placeholder rows while fast scrolling, and a bottom loader while more items load
//! - a measurement bootstrap for placeholder sizing
//!
//! Output is a borrowed [`Frame`] describing what to mount, top to bottom. This crate holds no
//! UI objects.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod frame;
mod options;
mod view;

#[cfg(test)]
mod tests;

pub use frame::{Body, BottomIndicator, Frame, MeasureProbe, PlaceholderRow, Row};
pub use options::{
    BottomLoader, DEFAULT_BOTTOM_LOADER_COUNT, DEFAULT_ITEM_REF_KEY, DEFAULT_PLACEHOLDER_INSET_PX,
    DEFAULT_PLACEHOLDER_MARGIN_PX, MeasureItemCallback, ReachBottomCallback, ViewOptions,
};
pub use view::{ScrollOutcome, WindowedListView};
