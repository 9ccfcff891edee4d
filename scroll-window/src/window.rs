use crate::{DEFAULT_LOOKAHEAD_PX, DEFAULT_VISIBLE_COUNT, WindowOptions, WindowRange};

/// Maps a scroll offset onto the index window of a fixed-height list.
///
/// Stateless: identical inputs always produce identical [`WindowRange`]s, and the work per call
/// is constant regardless of the item count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowCalculator {
    item_height: u32,
    visible_count: usize,
    lookahead_px: u32,
}

impl WindowCalculator {
    /// Creates a calculator for rows of `item_height` px rendering `visible_count` items.
    ///
    /// A zero `item_height` is clamped to 1.
    pub fn new(item_height: u32, visible_count: usize) -> Self {
        if item_height == 0 {
            wwarn!("WindowCalculator::new: item_height is 0, clamping to 1");
        }
        Self {
            item_height: item_height.max(1),
            visible_count,
            lookahead_px: DEFAULT_LOOKAHEAD_PX,
        }
    }

    pub fn from_options(options: &WindowOptions) -> Self {
        Self::new(options.item_height, options.visible_count)
            .with_lookahead_px(options.lookahead_px)
    }

    pub fn with_lookahead_px(mut self, lookahead_px: u32) -> Self {
        self.lookahead_px = lookahead_px;
        self
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn lookahead_px(&self) -> u32 {
        self.lookahead_px
    }

    /// `floor((offset + lookahead_px) / item_height)`.
    pub fn start_index(&self, offset: u64) -> usize {
        let biased = offset.saturating_add(self.lookahead_px as u64);
        let index = biased / self.item_height as u64;
        usize::try_from(index).unwrap_or(usize::MAX)
    }

    /// Offset of the top edge of `index`.
    pub fn item_offset(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.item_height as u64)
    }

    pub fn total_content_px(&self, item_count: usize) -> u64 {
        self.item_offset(item_count)
    }

    pub fn compute(&self, offset: u64, item_count: usize) -> WindowRange {
        let start_index = self.start_index(offset);
        WindowRange {
            start_index,
            visible_count: self.visible_count,
            leading_spacer_px: self.item_offset(start_index),
            total_content_px: self.total_content_px(item_count),
        }
    }
}

impl Default for WindowCalculator {
    fn default() -> Self {
        Self::new(1, DEFAULT_VISIBLE_COUNT)
    }
}
