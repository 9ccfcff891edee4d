use core::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A measured item footprint.
///
/// `main` is the scroll axis (height for vertical lists), `cross` the other axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub main: u32,
    pub cross: u32,
}

/// One scroll notification, captured from the UI's scroll container.
///
/// Samples are immutable; each one supersedes the previous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    /// Scroll offset of the viewport's top edge.
    pub offset: u64,
    /// Visible size of the scroll container.
    pub viewport_size: u32,
    /// Full scrollable size reported by the container.
    pub content_size: u64,
    pub timestamp_ms: u64,
}

impl ScrollSample {
    pub fn new(offset: u64, viewport_size: u32, content_size: u64, timestamp_ms: u64) -> Self {
        Self {
            offset,
            viewport_size,
            content_size,
            timestamp_ms,
        }
    }

    /// Offset of the viewport's bottom edge.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.viewport_size as u64)
    }
}

/// The index window to render for one scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    /// Render-ahead count; `start_index + visible_count` may exceed the item count.
    pub visible_count: usize,
    /// Space reserved for every item above `start_index`.
    pub leading_spacer_px: u64,
    pub total_content_px: u64,
}

impl WindowRange {
    /// Exclusive end index (unclamped).
    pub fn end_index(&self) -> usize {
        self.start_index.saturating_add(self.visible_count)
    }

    /// The index range to slice a collection of `item_count` items with.
    ///
    /// Windows past the end of the collection yield a shorter (possibly empty) range.
    pub fn slice_range(&self, item_count: usize) -> Range<usize> {
        let start = self.start_index.min(item_count);
        let end = self.end_index().min(item_count);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.slice_range(items.len())]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    /// Render the real window.
    #[default]
    Settled,
    /// Render placeholder rows until the settle timer fires.
    FastScrolling,
}

/// What the body of the list should contain for the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    Window,
    Placeholders { count: usize },
}

/// Identity of one armed settle timer. Ids are never reused within a [`crate::ScrollState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);

/// A settle-back timer the adapter is expected to schedule.
///
/// Adapters with a real timer API schedule a callback for `deadline_ms` and report back with the
/// `id`; adapters with a frame loop simply poll `tick(now_ms)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleTimer {
    pub id: TimerId,
    pub deadline_ms: u64,
}

impl SettleTimer {
    pub fn delay_from(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }
}
