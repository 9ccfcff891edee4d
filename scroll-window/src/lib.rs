//! A headless windowing engine for very long, append-growing lists of fixed-height rows.
//!
//! For a ready-made orchestrating view (bottom loader, measurement bootstrap, composed frames),
//! see the `scroll-window-adapter` crate.
//!
//! This crate focuses on the per-sample math a list adapter needs on its hot path: scroll speed
//! and direction, the visible index window plus its leading spacer, bottom-of-list detection
//! with a one-shot latch, and the fast-scroll placeholder state machine.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll samples (offset, viewport size, content size, timestamp)
//! - the fixed item height
//! - timer callbacks or periodic `tick(now_ms)` calls for settle-back
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod metrics;
mod options;
mod placeholder;
mod sentinel;
mod state;
mod types;
mod window;


pub use metrics::{ScrollMetrics, ScrollReading, scroll_speed};
pub use options::{
    DEFAULT_BOTTOM_TOLERANCE_PX, DEFAULT_FAST_SCROLL_THRESHOLD, DEFAULT_LOOKAHEAD_PX,
    DEFAULT_PLACEHOLDER_COUNT, DEFAULT_SETTLE_DELAY_MS, DEFAULT_VISIBLE_COUNT, WindowOptions,
};
pub use placeholder::{PlaceholderPolicy, PolicyDecision};
pub use sentinel::{BottomSentinel, is_at_bottom};
pub use state::ScrollState;
pub use types::{
    Rect, RenderMode, ScrollDirection, ScrollPhase, ScrollSample, SettleTimer, TimerId,
    WindowRange,
};
pub use window::WindowCalculator;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
