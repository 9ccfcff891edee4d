use crate::{
    RenderMode, ScrollPhase, ScrollReading, ScrollSample, ScrollState, SettleTimer, TimerId,
    WindowOptions,
};

/// The result of feeding one sample to [`PlaceholderPolicy::on_sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicyDecision {
    pub phase: ScrollPhase,
    /// `true` when the sample moved the state machine to a different phase.
    pub changed: bool,
    /// The newly armed settle timer. Any previously armed timer is cancelled.
    pub settle_timer: Option<SettleTimer>,
}

/// Decides whether the list renders its real window or placeholder rows.
///
/// State machine over [`ScrollPhase`]:
/// - `Settled` → `FastScrolling` on a fast sample (when enabled and not near the bottom).
/// - `FastScrolling` → `Settled` on a slow sample, on a near-bottom sample, or when the settle
///   timer fires without an intervening sample.
///
/// Every sample cancels the pending settle timer; fast samples arm a fresh one. Timers are never
/// stacked, and firing a cancelled timer is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderPolicy {
    enabled: bool,
    placeholder_count: usize,
    settle_delay_ms: u64,
    item_height: u32,
}

impl PlaceholderPolicy {
    pub fn new(
        enabled: bool,
        placeholder_count: usize,
        settle_delay_ms: u64,
        item_height: u32,
    ) -> Self {
        Self {
            enabled,
            placeholder_count,
            settle_delay_ms,
            item_height: item_height.max(1),
        }
    }

    pub fn from_options(options: &WindowOptions) -> Self {
        Self::new(
            options.fast_scroll_enabled,
            options.placeholder_count,
            options.settle_delay_ms,
            options.item_height,
        )
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholder_count
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    /// Returns whether less than one screenful plus the placeholder block remains below.
    pub fn near_bottom(&self, sample: &ScrollSample) -> bool {
        let block = (self.placeholder_count as u64).saturating_mul(self.item_height as u64);
        sample.end().saturating_add(block) > sample.content_size
    }

    /// Applies one sample (already read by [`crate::ScrollMetrics`]) to `state`.
    pub fn on_sample(
        &self,
        state: &mut ScrollState,
        reading: &ScrollReading,
        sample: &ScrollSample,
    ) -> PolicyDecision {
        let prev = state.phase();
        state.cancel_settle_timer();

        let fast = self.enabled && reading.is_fast && !self.near_bottom(sample);
        let settle_timer = if fast {
            state.set_phase(ScrollPhase::FastScrolling);
            let deadline_ms = sample.timestamp_ms.saturating_add(self.settle_delay_ms);
            Some(state.arm_settle_timer(deadline_ms))
        } else {
            state.set_phase(ScrollPhase::Settled);
            None
        };

        let phase = state.phase();
        if phase != prev {
            wdebug!(
                ?prev,
                next = ?phase,
                speed = reading.speed,
                "PlaceholderPolicy: phase change"
            );
        }
        PolicyDecision {
            phase,
            changed: phase != prev,
            settle_timer,
        }
    }

    /// Fires the settle timer `id`.
    ///
    /// Returns `true` if this call moved the state back to `Settled`. Stale or already fired ids
    /// are ignored.
    pub fn on_settle_timer(&self, state: &mut ScrollState, id: TimerId) -> bool {
        match state.settle_timer() {
            Some(timer) if timer.id == id => {
                state.cancel_settle_timer();
                self.settle(state)
            }
            _ => {
                wtrace!(id = id.0, "PlaceholderPolicy: ignoring stale settle timer");
                false
            }
        }
    }

    /// Poll-driven alternative to [`Self::on_settle_timer`]: fires the armed timer once
    /// `now_ms` reaches its deadline.
    pub fn tick(&self, state: &mut ScrollState, now_ms: u64) -> bool {
        let Some(timer) = state.settle_timer() else {
            return false;
        };
        if !timer.is_due(now_ms) {
            return false;
        }
        self.on_settle_timer(state, timer.id)
    }

    /// Cancels any pending timer and forces `Settled` (used on teardown).
    pub fn cancel(&self, state: &mut ScrollState) {
        state.cancel_settle_timer();
        state.set_phase(ScrollPhase::Settled);
    }

    pub fn render_mode(&self, state: &ScrollState) -> RenderMode {
        match state.phase() {
            ScrollPhase::Settled => RenderMode::Window,
            ScrollPhase::FastScrolling => RenderMode::Placeholders {
                count: self.placeholder_count,
            },
        }
    }

    fn settle(&self, state: &mut ScrollState) -> bool {
        if state.phase() == ScrollPhase::Settled {
            return false;
        }
        wdebug!("PlaceholderPolicy: settled");
        state.set_phase(ScrollPhase::Settled);
        true
    }
}

impl Default for PlaceholderPolicy {
    fn default() -> Self {
        Self::from_options(&WindowOptions::default())
    }
}
