use core::cmp;

use crate::{DEFAULT_FAST_SCROLL_THRESHOLD, ScrollDirection, ScrollSample, ScrollState};

/// Speed and direction derived from two consecutive samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollReading {
    /// px/ms, always finite and non-negative.
    pub speed: f32,
    /// `None` for the first sample and when the offset did not move.
    pub direction: Option<ScrollDirection>,
    pub is_fast: bool,
}

/// Returns `|Δoffset| / Δt` in px/ms.
///
/// A zero (or negative) time delta yields `0.0` rather than a division by zero.
pub fn scroll_speed(prev: &ScrollSample, next: &ScrollSample) -> f32 {
    if next.timestamp_ms < prev.timestamp_ms {
        wwarn!(
            prev = prev.timestamp_ms,
            next = next.timestamp_ms,
            "scroll_speed: sample timestamps went backwards"
        );
        return 0.0;
    }
    let dt = next.timestamp_ms - prev.timestamp_ms;
    if dt == 0 {
        return 0.0;
    }
    let distance = next.offset.abs_diff(prev.offset);
    distance as f32 / dt as f32
}

/// Classifies scroll samples as fast or not against a fixed speed threshold.
///
/// Pure: the feature flag that decides whether fast classification is honored lives with the
/// caller (see [`crate::PlaceholderPolicy`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    threshold: f32,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_FAST_SCROLL_THRESHOLD)
    }
}

impl ScrollMetrics {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Reads speed/direction for `next` given its predecessor.
    pub fn read(&self, prev: Option<&ScrollSample>, next: &ScrollSample) -> ScrollReading {
        let Some(prev) = prev else {
            return ScrollReading::default();
        };
        let speed = scroll_speed(prev, next);
        let direction = match next.offset.cmp(&prev.offset) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => None,
        };
        ScrollReading {
            speed,
            direction,
            is_fast: speed > self.threshold,
        }
    }

    /// Reads `sample` against the last sample stored in `state`, then records it there.
    pub fn observe(&self, state: &mut ScrollState, sample: ScrollSample) -> ScrollReading {
        let reading = self.read(state.last_sample().as_ref(), &sample);
        wtrace!(
            offset = sample.offset,
            timestamp_ms = sample.timestamp_ms,
            speed = reading.speed,
            is_fast = reading.is_fast,
            "ScrollMetrics::observe"
        );
        state.record(sample, reading.speed, reading.direction);
        reading
    }
}
