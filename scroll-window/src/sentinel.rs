use crate::{DEFAULT_BOTTOM_TOLERANCE_PX, ScrollSample};

/// Returns whether the viewport sits at the effective bottom of the content:
/// `content_size - offset - tolerance <= viewport_size`.
///
/// Overscrolled offsets (past the content end) count as bottom.
pub fn is_at_bottom(offset: u64, viewport_size: u32, content_size: u64, tolerance_px: u32) -> bool {
    let remaining = content_size
        .saturating_sub(offset)
        .saturating_sub(tolerance_px as u64);
    remaining <= viewport_size as u64
}

/// One-shot "reached bottom" detector.
///
/// [`Self::observe`] reports `true` only on the transition from "not latched" to "at bottom".
/// The latch never resets by itself: not on a timer and not when the user scrolls away. The owner
/// re-arms it with [`Self::reset`] once more items have been appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BottomSentinel {
    tolerance_px: u32,
    latched: bool,
}

impl Default for BottomSentinel {
    fn default() -> Self {
        Self::new(DEFAULT_BOTTOM_TOLERANCE_PX)
    }
}

impl BottomSentinel {
    pub fn new(tolerance_px: u32) -> Self {
        Self {
            tolerance_px,
            latched: false,
        }
    }

    pub fn tolerance_px(&self) -> u32 {
        self.tolerance_px
    }

    pub fn set_tolerance_px(&mut self, tolerance_px: u32) {
        self.tolerance_px = tolerance_px;
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn is_at_bottom(&self, sample: &ScrollSample) -> bool {
        is_at_bottom(
            sample.offset,
            sample.viewport_size,
            sample.content_size,
            self.tolerance_px,
        )
    }

    /// Evaluates `sample` and returns `true` if this sample fires the notification.
    pub fn observe(&mut self, sample: &ScrollSample) -> bool {
        if self.latched || !self.is_at_bottom(sample) {
            return false;
        }
        wdebug!(
            offset = sample.offset,
            content_size = sample.content_size,
            "BottomSentinel: reached bottom"
        );
        self.latched = true;
        true
    }

    /// Re-arms bottom detection.
    pub fn reset(&mut self) {
        self.latched = false;
    }

    /// Mirrors an externally owned "loading more" flag onto the latch.
    pub fn set_latched(&mut self, latched: bool) {
        self.latched = latched;
    }
}
