/// Items rendered from `start_index` onwards when no render-ahead count is configured.
pub const DEFAULT_VISIBLE_COUNT: usize = 30;
/// Bias applied to the scroll offset so the window starts slightly ahead of the top pixel.
pub const DEFAULT_LOOKAHEAD_PX: u32 = 10;
/// Placeholder rows shown while fast scrolling.
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 15;
/// Speed (px/ms) above which a sample counts as fast scrolling.
pub const DEFAULT_FAST_SCROLL_THRESHOLD: f32 = 2.5;
/// Idle time after the last fast sample before real rows come back.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 250;
/// Sub-pixel rounding slack for bottom detection.
pub const DEFAULT_BOTTOM_TOLERANCE_PX: u32 = 1;

/// Configuration shared by the window calculator, metrics, sentinel and placeholder policy.
///
/// This is plain data (cheap to copy). With `feature = "serde"`, it implements
/// `Serialize`/`Deserialize` so adapters can load it from their own config files.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    /// Fixed height of every row. Zero is clamped to 1.
    pub item_height: u32,
    /// Render-ahead count: how many items are rendered starting at `start_index`.
    ///
    /// This is not derived from the viewport size.
    pub visible_count: usize,
    pub lookahead_px: u32,
    /// Number of placeholder rows shown while fast scrolling. Also sizes the near-bottom guard.
    pub placeholder_count: usize,
    /// Enables placeholder substitution while fast scrolling (aka "loading effect on scroll").
    pub fast_scroll_enabled: bool,
    pub fast_scroll_threshold: f32,
    pub settle_delay_ms: u64,
    pub bottom_tolerance_px: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

impl WindowOptions {
    pub fn new(item_height: u32) -> Self {
        Self {
            item_height,
            visible_count: DEFAULT_VISIBLE_COUNT,
            lookahead_px: DEFAULT_LOOKAHEAD_PX,
            placeholder_count: DEFAULT_PLACEHOLDER_COUNT,
            fast_scroll_enabled: true,
            fast_scroll_threshold: DEFAULT_FAST_SCROLL_THRESHOLD,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            bottom_tolerance_px: DEFAULT_BOTTOM_TOLERANCE_PX,
        }
    }

    /// The item height actually used for layout (never zero).
    pub fn effective_item_height(&self) -> u32 {
        self.item_height.max(1)
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_visible_count(mut self, visible_count: usize) -> Self {
        self.visible_count = visible_count;
        self
    }

    /// Sets both the render-ahead count and the placeholder count to `loaded_items`.
    pub fn with_loaded_items(mut self, loaded_items: usize) -> Self {
        self.visible_count = loaded_items;
        self.placeholder_count = loaded_items;
        self
    }

    pub fn with_lookahead_px(mut self, lookahead_px: u32) -> Self {
        self.lookahead_px = lookahead_px;
        self
    }

    pub fn with_placeholder_count(mut self, placeholder_count: usize) -> Self {
        self.placeholder_count = placeholder_count;
        self
    }

    pub fn with_fast_scroll_enabled(mut self, enabled: bool) -> Self {
        self.fast_scroll_enabled = enabled;
        self
    }

    pub fn with_fast_scroll_threshold(mut self, threshold: f32) -> Self {
        self.fast_scroll_threshold = threshold;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_bottom_tolerance_px(mut self, tolerance_px: u32) -> Self {
        self.bottom_tolerance_px = tolerance_px;
        self
    }
}
