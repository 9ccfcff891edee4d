use crate::{ScrollDirection, ScrollPhase, ScrollSample, SettleTimer, TimerId};

/// Per-view scroll tracking state.
///
/// One instance belongs to exactly one list view; [`crate::ScrollMetrics`] and
/// [`crate::PlaceholderPolicy`] read and update it but never keep a copy. Two views never share
/// speed or timer state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    last_sample: Option<ScrollSample>,
    speed: f32,
    direction: Option<ScrollDirection>,
    phase: ScrollPhase,
    settle_timer: Option<SettleTimer>,
    next_timer_id: u64,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last_sample
    }

    /// Speed of the most recent sample, in px/ms.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_fast_scrolling(&self) -> bool {
        self.phase == ScrollPhase::FastScrolling
    }

    /// The settle timer that is currently armed, if any.
    pub fn settle_timer(&self) -> Option<SettleTimer> {
        self.settle_timer
    }

    /// Drops every pending timer and returns to the initial phase.
    ///
    /// Timer ids keep increasing so callbacks armed before the reset stay stale.
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.speed = 0.0;
        self.direction = None;
        self.phase = ScrollPhase::Settled;
        self.settle_timer = None;
    }

    pub(crate) fn record(
        &mut self,
        sample: ScrollSample,
        speed: f32,
        direction: Option<ScrollDirection>,
    ) {
        self.last_sample = Some(sample);
        self.speed = speed;
        if direction.is_some() {
            self.direction = direction;
        }
    }

    pub(crate) fn set_phase(&mut self, phase: ScrollPhase) {
        self.phase = phase;
    }

    pub(crate) fn arm_settle_timer(&mut self, deadline_ms: u64) -> SettleTimer {
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        let timer = SettleTimer {
            id: TimerId(self.next_timer_id),
            deadline_ms,
        };
        self.settle_timer = Some(timer);
        timer
    }

    pub(crate) fn cancel_settle_timer(&mut self) -> Option<SettleTimer> {
        self.settle_timer.take()
    }
}
