use alloc::borrow::Cow;
use alloc::sync::Arc;

use scroll_window::{Rect, WindowOptions};

/// Placeholder rows shown under the list while the host loads more items.
pub const DEFAULT_BOTTOM_LOADER_COUNT: usize = 0;
/// Property name hosts use to attach their measurement handle to the probe item.
pub const DEFAULT_ITEM_REF_KEY: &str = "ref";
/// Placeholder rows are this much narrower than the measured item.
pub const DEFAULT_PLACEHOLDER_INSET_PX: u32 = 30;
pub const DEFAULT_PLACEHOLDER_MARGIN_PX: u32 = 4;

/// Fired once per latch cycle when the list is scrolled to its bottom.
pub type ReachBottomCallback = Arc<dyn Fn() + Send + Sync>;

/// Measures the rendered footprint of the item at the given index.
///
/// Returns `None` when the item is not mounted yet; the view retries on the next collection
/// change.
pub type MeasureItemCallback = Arc<dyn Fn(usize) -> Option<Rect> + Send + Sync>;

/// What to show below the list while the host's "loading more" flag is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BottomLoader {
    /// This many placeholder rows.
    Placeholders(usize),
    /// A host-supplied indicator; the view only reports where it goes.
    Custom,
}

impl Default for BottomLoader {
    fn default() -> Self {
        Self::Placeholders(DEFAULT_BOTTOM_LOADER_COUNT)
    }
}

/// Configuration for [`crate::WindowedListView`].
///
/// Callbacks are stored in `Arc`s so the options stay cheap to clone.
pub struct ViewOptions {
    pub window: WindowOptions,
    pub bottom_loader: BottomLoader,
    pub item_ref_key: Cow<'static, str>,
    pub placeholder_inset_px: u32,
    pub placeholder_margin_px: u32,
    pub on_reach_bottom: Option<ReachBottomCallback>,
    pub measure_item: Option<MeasureItemCallback>,
}

impl Clone for ViewOptions {
    fn clone(&self) -> Self {
        Self {
            window: self.window,
            bottom_loader: self.bottom_loader,
            item_ref_key: self.item_ref_key.clone(),
            placeholder_inset_px: self.placeholder_inset_px,
            placeholder_margin_px: self.placeholder_margin_px,
            on_reach_bottom: self.on_reach_bottom.clone(),
            measure_item: self.measure_item.clone(),
        }
    }
}

impl ViewOptions {
    /// Creates options for rows of `item_height` px with every other setting at its default.
    pub fn new(item_height: u32) -> Self {
        Self::from_window(WindowOptions::new(item_height))
    }

    pub fn from_window(window: WindowOptions) -> Self {
        Self {
            window,
            bottom_loader: BottomLoader::default(),
            item_ref_key: Cow::Borrowed(DEFAULT_ITEM_REF_KEY),
            placeholder_inset_px: DEFAULT_PLACEHOLDER_INSET_PX,
            placeholder_margin_px: DEFAULT_PLACEHOLDER_MARGIN_PX,
            on_reach_bottom: None,
            measure_item: None,
        }
    }

    pub fn with_window(mut self, window: WindowOptions) -> Self {
        self.window = window;
        self
    }

    /// Updates the engine options in place.
    pub fn with_window_options(mut self, f: impl FnOnce(WindowOptions) -> WindowOptions) -> Self {
        self.window = f(self.window);
        self
    }

    pub fn with_bottom_loader(mut self, bottom_loader: BottomLoader) -> Self {
        self.bottom_loader = bottom_loader;
        self
    }

    pub fn with_bottom_loader_count(mut self, count: usize) -> Self {
        self.bottom_loader = BottomLoader::Placeholders(count);
        self
    }

    pub fn with_custom_bottom_loader(mut self) -> Self {
        self.bottom_loader = BottomLoader::Custom;
        self
    }

    pub fn with_item_ref_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.item_ref_key = key.into();
        self
    }

    pub fn with_placeholder_inset_px(mut self, inset_px: u32) -> Self {
        self.placeholder_inset_px = inset_px;
        self
    }

    pub fn with_placeholder_margin_px(mut self, margin_px: u32) -> Self {
        self.placeholder_margin_px = margin_px;
        self
    }

    pub fn with_on_reach_bottom(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_reach_bottom = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_measure_item(
        mut self,
        f: Option<impl Fn(usize) -> Option<Rect> + Send + Sync + 'static>,
    ) -> Self {
        self.measure_item = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewOptions")
            .field("window", &self.window)
            .field("bottom_loader", &self.bottom_loader)
            .field("item_ref_key", &self.item_ref_key)
            .field("placeholder_inset_px", &self.placeholder_inset_px)
            .field("placeholder_margin_px", &self.placeholder_margin_px)
            .field("on_reach_bottom", &self.on_reach_bottom.is_some())
            .field("measure_item", &self.measure_item.is_some())
            .finish()
    }
}
