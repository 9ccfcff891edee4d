// Example: an infinite list that loads 20 items per page when scrolled to the bottom.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use scroll_window::{Rect, ScrollSample};
use scroll_window_adapter::{Row, ViewOptions, WindowedListView};

const ITEM_HEIGHT: u32 = 40;
const VIEWPORT: u32 = 300;
const ITEMS_PER_LOAD: usize = 20;

fn load_more(items: &mut Vec<String>) {
    let start = items.len();
    items.extend((0..ITEMS_PER_LOAD).map(|i| format!("Item {}", start + i + 1)));
}

fn main() {
    // The host owns the data and the "loading more" flag.
    let wants_more = Arc::new(AtomicBool::new(false));
    let mut items = Vec::new();
    load_more(&mut items);

    let opts = ViewOptions::new(ITEM_HEIGHT)
        .with_bottom_loader_count(3)
        .with_measure_item(Some(|_index: usize| {
            Some(Rect {
                main: ITEM_HEIGHT,
                cross: 300,
            })
        }))
        .with_on_reach_bottom(Some({
            let wants_more = Arc::clone(&wants_more);
            move || {
                println!("reached to bottom");
                wants_more.store(true, Ordering::Relaxed);
            }
        }));

    let mut view = WindowedListView::new(opts);
    view.set_item_count(Some(items.len()));

    let mut now_ms = 0u64;
    let mut offset = 0u64;
    for _page in 0..3 {
        let content = items.len() as u64 * ITEM_HEIGHT as u64;
        while offset + (VIEWPORT as u64) < content {
            offset += 20;
            now_ms += 16;
            view.on_scroll(ScrollSample::new(offset, VIEWPORT, content, now_ms));
            view.tick(now_ms);
        }

        if wants_more.swap(false, Ordering::Relaxed) {
            view.set_bottom_loading(true);
            let frame = view.compose(Some(&items[..]));
            let mut placeholders = 0;
            frame.for_each_row(|row| {
                if let Row::Placeholder(_) = row {
                    placeholders += 1;
                }
            });
            println!("loading: {placeholders} placeholder rows under the list");

            // Simulated network delay.
            now_ms += 3_000;
            load_more(&mut items);
            view.set_item_count(Some(items.len()));
            view.set_bottom_loading(false);
        }

        let frame = view.compose(Some(&items[..]));
        let mut first = None;
        let mut last = None;
        frame.for_each_item(|index, _item| {
            first.get_or_insert(index);
            last = Some(index);
        });
        println!(
            "items={} spacer={} rendered={:?}..={:?}",
            items.len(),
            frame.leading_spacer_px,
            first,
            last
        );
    }

    view.unmount();
}
