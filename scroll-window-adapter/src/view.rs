use scroll_window::{
    BottomSentinel, PlaceholderPolicy, Rect, RenderMode, ScrollMetrics, ScrollPhase,
    ScrollReading, ScrollSample, ScrollState, SettleTimer, TimerId, WindowCalculator, WindowRange,
};

use crate::{Body, BottomIndicator, BottomLoader, Frame, MeasureProbe, PlaceholderRow, ViewOptions};

/// What one scroll notification changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOutcome {
    pub reading: ScrollReading,
    pub window: WindowRange,
    pub phase: ScrollPhase,
    pub phase_changed: bool,
    /// A settle timer the host should schedule (then report via
    /// [`WindowedListView::on_settle_timer`]). Hosts that poll `tick` can ignore it.
    pub settle_timer: Option<SettleTimer>,
    /// `true` when this sample fired the "reached bottom" notification.
    pub reached_bottom: bool,
}

/// A framework-neutral windowed list view.
///
/// The view owns the per-instance [`ScrollState`] and orchestrates the engine for every scroll
/// notification: metrics → placeholder policy, window calculator, bottom sentinel. Adapters drive
/// it by calling:
/// - `on_scroll` for every scroll event of the viewport element
/// - `set_item_count` whenever the host's collection changes
/// - `set_bottom_loading` to mirror the host's "loading more" flag
/// - `on_settle_timer(id)` from a scheduled timer, or `tick(now_ms)` each frame
/// - `unmount` on teardown
///
/// and render whatever `compose` returns.
#[derive(Clone, Debug)]
pub struct WindowedListView {
    options: ViewOptions,
    calculator: WindowCalculator,
    metrics: ScrollMetrics,
    policy: PlaceholderPolicy,
    sentinel: BottomSentinel,
    state: ScrollState,
    window: WindowRange,
    item_count: Option<usize>,
    measured: Option<Rect>,
    bottom_loading: bool,
    mounted: bool,
}

impl WindowedListView {
    /// Mounts a new view. The collection starts absent; call `set_item_count` once it exists.
    pub fn new(options: ViewOptions) -> Self {
        wdebug!(
            item_height = options.window.item_height,
            visible_count = options.window.visible_count,
            fast_scroll_enabled = options.window.fast_scroll_enabled,
            "WindowedListView::new"
        );
        let calculator = WindowCalculator::from_options(&options.window);
        Self {
            calculator,
            metrics: ScrollMetrics::new(options.window.fast_scroll_threshold),
            policy: PlaceholderPolicy::from_options(&options.window),
            sentinel: BottomSentinel::new(options.window.bottom_tolerance_px),
            state: ScrollState::new(),
            window: calculator.compute(0, 0),
            item_count: None,
            measured: None,
            bottom_loading: false,
            mounted: true,
            options,
        }
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Replaces the options, keeping scroll state, the latch and the measurement.
    pub fn set_options(&mut self, options: ViewOptions) {
        self.calculator = WindowCalculator::from_options(&options.window);
        self.metrics = ScrollMetrics::new(options.window.fast_scroll_threshold);
        self.policy = PlaceholderPolicy::from_options(&options.window);
        self.sentinel.set_tolerance_px(options.window.bottom_tolerance_px);
        self.options = options;
        if !self.policy.enabled() {
            self.policy.cancel(&mut self.state);
        }
        self.recompute_window();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut ViewOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn window(&self) -> WindowRange {
        self.window
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.phase()
    }

    pub fn is_fast_scrolling(&self) -> bool {
        self.state.is_fast_scrolling()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.policy.render_mode(&self.state)
    }

    pub fn item_count(&self) -> Option<usize> {
        self.item_count
    }

    pub fn measured_item(&self) -> Option<Rect> {
        self.measured
    }

    pub fn bottom_loading(&self) -> bool {
        self.bottom_loading
    }

    pub fn is_bottom_latched(&self) -> bool {
        self.sentinel.is_latched()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Handles one scroll notification from the viewport element.
    ///
    /// Returns `None` after [`Self::unmount`].
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Option<ScrollOutcome> {
        if !self.mounted {
            return None;
        }
        wtrace!(
            offset = sample.offset,
            viewport_size = sample.viewport_size,
            content_size = sample.content_size,
            timestamp_ms = sample.timestamp_ms,
            "WindowedListView::on_scroll"
        );

        let reading = self.metrics.observe(&mut self.state, sample);
        let decision = self.policy.on_sample(&mut self.state, &reading, &sample);
        self.window = self
            .calculator
            .compute(sample.offset, self.item_count.unwrap_or(0));

        // Bottom detection needs an enumerable collection to append to.
        let reached_bottom = self.item_count.is_some() && self.sentinel.observe(&sample);
        if reached_bottom {
            wdebug!(
                offset = sample.offset,
                item_count = ?self.item_count,
                "WindowedListView: reached bottom"
            );
            if let Some(cb) = &self.options.on_reach_bottom {
                cb();
            }
        }

        Some(ScrollOutcome {
            reading,
            window: self.window,
            phase: decision.phase,
            phase_changed: decision.changed,
            settle_timer: decision.settle_timer,
            reached_bottom,
        })
    }

    /// Fires a settle timer previously returned in a [`ScrollOutcome`].
    ///
    /// Returns `true` if the view switched back to the real window. Stale ids and calls after
    /// unmount are no-ops.
    pub fn on_settle_timer(&mut self, id: TimerId) -> bool {
        if !self.mounted {
            return false;
        }
        self.policy.on_settle_timer(&mut self.state, id)
    }

    /// Poll-driven settle-back. Returns `true` if the view switched back to the real window.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.policy.tick(&mut self.state, now_ms)
    }

    /// Reports the current length of the host's collection (`None` when it is not enumerable).
    ///
    /// Recomputes the window at the last known offset and, the first time the collection is
    /// non-empty, runs the measurement bootstrap.
    pub fn set_item_count(&mut self, item_count: Option<usize>) {
        if !self.mounted || self.item_count == item_count {
            return;
        }
        wtrace!(?item_count, "WindowedListView::set_item_count");
        self.item_count = item_count;
        self.recompute_window();

        if self.measured.is_none() && item_count.is_some_and(|n| n > 0) {
            let measured = self.options.measure_item.as_ref().and_then(|measure| measure(0));
            if let Some(rect) = measured {
                self.set_item_measurement(rect);
            }
        }
    }

    /// Records the measured footprint of one item (used for placeholder width).
    ///
    /// Item height stays the configured constant.
    pub fn set_item_measurement(&mut self, rect: Rect) {
        if !self.mounted {
            return;
        }
        if rect.main != self.calculator.item_height() {
            wwarn!(
                measured = rect.main,
                configured = self.calculator.item_height(),
                "WindowedListView: measured item height differs from the configured height"
            );
        }
        self.measured = Some(rect);
    }

    /// Mirrors the host's "loading more" flag. Safe to call every frame.
    ///
    /// Switching to `true` shows the bottom loader and keeps the bottom latch closed; switching
    /// back to `false` hides it and re-arms bottom detection. Repeating the current value is a
    /// no-op.
    pub fn set_bottom_loading(&mut self, loading: bool) {
        if !self.mounted || self.bottom_loading == loading {
            return;
        }
        wtrace!(loading, "WindowedListView::set_bottom_loading");
        self.bottom_loading = loading;
        self.sentinel.set_latched(loading);
    }

    /// Re-arms bottom detection without touching the loading flag.
    pub fn reset_bottom(&mut self) {
        self.sentinel.reset();
    }

    /// Offset the host should apply to its viewport element to bring `index` to the top.
    ///
    /// The result is clamped to the scrollable range of the last sample, when there is one.
    pub fn scroll_to_index(&self, index: usize) -> u64 {
        self.clamp_offset(self.calculator.item_offset(index))
    }

    pub fn scroll_to_offset(&self, offset: u64) -> u64 {
        self.clamp_offset(offset)
    }

    /// Composes the output for the host's current collection.
    ///
    /// `items` must be the collection whose length was last reported through `set_item_count`;
    /// `None` renders only the spacer and the bottom indicator, even while fast scrolling.
    pub fn compose<'a, T>(&'a self, items: Option<&'a [T]>) -> Frame<'a, T> {
        let row = self.placeholder_row();
        let body = match (self.render_mode(), items) {
            (_, None) => Body::Empty,
            (RenderMode::Placeholders { count }, Some(_)) => Body::Placeholders { count, row },
            (RenderMode::Window, Some(items)) => {
                let range = self.window.slice_range(items.len());
                Body::Window {
                    start_index: range.start,
                    items: &items[range],
                }
            }
        };

        let bottom = if !self.bottom_loading {
            BottomIndicator::None
        } else {
            match self.options.bottom_loader {
                BottomLoader::Placeholders(count) => BottomIndicator::Placeholders { count, row },
                BottomLoader::Custom => BottomIndicator::Custom,
            }
        };

        let probe_item = match items {
            Some(items) if self.measured.is_none() => items.first(),
            _ => None,
        };
        let probe = probe_item.map(|_| MeasureProbe {
            index: 0,
            ref_key: &*self.options.item_ref_key,
        });

        Frame {
            content_px: items.map_or(0, |items| self.calculator.total_content_px(items.len())),
            leading_spacer_px: self.window.leading_spacer_px,
            probe,
            body,
            bottom,
            probe_item,
        }
    }

    /// Tears the view down: cancels the settle timer and turns every later call into a no-op.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        wdebug!("WindowedListView::unmount");
        self.policy.cancel(&mut self.state);
        self.state.reset();
        self.mounted = false;
    }

    fn placeholder_row(&self) -> PlaceholderRow {
        PlaceholderRow {
            height: self.calculator.item_height(),
            width: self
                .measured
                .map(|rect| rect.cross.saturating_sub(self.options.placeholder_inset_px)),
            margin: self.options.placeholder_margin_px,
        }
    }

    fn recompute_window(&mut self) {
        let offset = self.state.last_sample().map_or(0, |s| s.offset);
        self.window = self
            .calculator
            .compute(offset, self.item_count.unwrap_or(0));
    }

    fn clamp_offset(&self, offset: u64) -> u64 {
        let Some(last) = self.state.last_sample() else {
            return offset;
        };
        let content = self
            .item_count
            .map_or(last.content_size, |n| self.calculator.total_content_px(n));
        offset.min(content.saturating_sub(last.viewport_size as u64))
    }
}
