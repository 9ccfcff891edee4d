/// Geometry of one shimmer/placeholder row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderRow {
    pub height: u32,
    /// `None` until an item has been measured; hosts fall back to their own default width.
    pub width: Option<u32>,
    pub margin: u32,
}

/// The item a host must render with its measurement handle attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeasureProbe<'a> {
    pub index: usize,
    /// Property name under which the host attaches the handle (e.g. `"ref"`).
    pub ref_key: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Body<'a, T> {
    /// The real window: `items[0]` is the item at `start_index`.
    Window { start_index: usize, items: &'a [T] },
    Placeholders { count: usize, row: PlaceholderRow },
    /// No enumerable collection to render.
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BottomIndicator {
    None,
    Placeholders { count: usize, row: PlaceholderRow },
    /// Mount the host's custom loader template here.
    Custom,
}

/// One renderable row, as yielded by [`Frame::for_each_row`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row<'a, T> {
    /// Empty block reserving the space of every item above the window.
    Spacer { height: u64 },
    Probe { index: usize, item: &'a T, ref_key: &'a str },
    Item { index: usize, item: &'a T },
    Placeholder(PlaceholderRow),
    CustomLoader,
}

/// The composed output of a [`crate::WindowedListView`], top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a, T> {
    /// Height of the scrollable content area.
    pub content_px: u64,
    pub leading_spacer_px: u64,
    pub probe: Option<MeasureProbe<'a>>,
    pub body: Body<'a, T>,
    pub bottom: BottomIndicator,
    /// The probe item itself (only set together with `probe`).
    pub(crate) probe_item: Option<&'a T>,
}

impl<'a, T> Frame<'a, T> {
    pub fn is_placeholder_body(&self) -> bool {
        matches!(self.body, Body::Placeholders { .. })
    }

    /// Real items in the window, with their collection indexes.
    pub fn for_each_item(&self, mut f: impl FnMut(usize, &'a T)) {
        if let Body::Window { start_index, items } = self.body {
            for (i, item) in items.iter().enumerate() {
                f(start_index + i, item);
            }
        }
    }

    /// Walks every row in mount order without allocating.
    pub fn for_each_row(&self, mut f: impl FnMut(Row<'a, T>)) {
        f(Row::Spacer {
            height: self.leading_spacer_px,
        });
        if let (Some(probe), Some(item)) = (self.probe, self.probe_item) {
            f(Row::Probe {
                index: probe.index,
                item,
                ref_key: probe.ref_key,
            });
        }
        match self.body {
            Body::Window { .. } => self.for_each_item(|index, item| f(Row::Item { index, item })),
            Body::Placeholders { count, row } => {
                for _ in 0..count {
                    f(Row::Placeholder(row));
                }
            }
            Body::Empty => {}
        }
        match self.bottom {
            BottomIndicator::None => {}
            BottomIndicator::Placeholders { count, row } => {
                for _ in 0..count {
                    f(Row::Placeholder(row));
                }
            }
            BottomIndicator::Custom => f(Row::CustomLoader),
        }
    }
}
