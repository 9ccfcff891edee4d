use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use scroll_window::{Rect, RenderMode, ScrollPhase, ScrollSample, WindowOptions};

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| std::format!("Item {}", i + 1)).collect()
}

fn counting_view(options: ViewOptions) -> (WindowedListView, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let view = WindowedListView::new(options.with_on_reach_bottom(Some({
        let hits = Arc::clone(&hits);
        move || {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    })));
    (view, hits)
}

fn rows<'a, T>(frame: &Frame<'a, T>) -> Vec<Row<'a, T>> {
    let mut out = Vec::new();
    frame.for_each_row(|row| out.push(row));
    out
}

#[test]
fn scenario_reaching_bottom_notifies_exactly_once() {
    let (mut view, hits) = counting_view(ViewOptions::new(40));
    let data = items(20);
    view.set_item_count(Some(data.len()));

    // 20 * 40 = 800px of content in a 300px viewport.
    let out = view.on_scroll(ScrollSample::new(0, 300, 800, 0)).unwrap();
    assert!(!out.reached_bottom);
    view.on_scroll(ScrollSample::new(250, 300, 800, 1_000));
    let out = view.on_scroll(ScrollSample::new(500, 300, 800, 2_000)).unwrap();
    assert!(out.reached_bottom);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    for t in 0..5 {
        let out = view
            .on_scroll(ScrollSample::new(500, 300, 800, 3_000 + t * 100))
            .unwrap();
        assert!(!out.reached_bottom);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(view.is_bottom_latched());
}

#[test]
fn scenario_fast_scroll_switches_to_placeholders() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    let data = items(1_000);
    view.set_item_count(Some(data.len()));

    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    let out = view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50)).unwrap();
    assert_eq!(out.reading.speed, 80.0);
    assert!(out.reading.is_fast);
    assert_eq!(out.phase, ScrollPhase::FastScrolling);
    assert!(out.phase_changed);
    assert_eq!(out.settle_timer.map(|t| t.deadline_ms), Some(300));

    let frame = view.compose(Some(&data[..]));
    assert!(frame.is_placeholder_body());
    match frame.body {
        Body::Placeholders { count, row } => {
            assert_eq!(count, 15);
            assert_eq!(row.height, 40);
        }
        other => panic!("expected placeholders, got {other:?}"),
    }
    let placeholders = rows(&frame)
        .iter()
        .filter(|r| matches!(r, Row::Placeholder(_)))
        .count();
    assert_eq!(placeholders, 15);
}

#[test]
fn scenario_idle_settles_back_to_real_window() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    let data = items(1_000);
    view.set_item_count(Some(data.len()));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50));
    assert!(view.is_fast_scrolling());

    // 300ms idle > 250ms settle window.
    assert!(view.tick(350));
    assert!(!view.tick(400));
    assert_eq!(view.render_mode(), RenderMode::Window);

    let frame = view.compose(Some(&data[..]));
    assert_eq!(frame.leading_spacer_px, 4_000);
    assert_eq!(frame.content_px, 40_000);
    match frame.body {
        Body::Window { start_index, items } => {
            assert_eq!(start_index, 100);
            assert_eq!(items.len(), 30);
            assert_eq!(items[0], "Item 101");
        }
        other => panic!("expected window, got {other:?}"),
    }
}

#[test]
fn scheduled_timer_ids_settle_once_and_ignore_stale_ids() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    view.set_item_count(Some(1_000));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    let first = view
        .on_scroll(ScrollSample::new(4_000, 300, 40_000, 50))
        .unwrap()
        .settle_timer
        .unwrap();
    let second = view
        .on_scroll(ScrollSample::new(8_000, 300, 40_000, 100))
        .unwrap()
        .settle_timer
        .unwrap();

    assert!(!view.on_settle_timer(first.id));
    assert!(view.is_fast_scrolling());
    assert!(view.on_settle_timer(second.id));
    assert!(!view.on_settle_timer(second.id));
    assert!(!view.is_fast_scrolling());
}

#[test]
fn window_past_the_end_renders_a_shorter_slice() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    let data = items(20);
    view.set_item_count(Some(data.len()));
    view.on_scroll(ScrollSample::new(500, 300, 800, 0));

    let frame = view.compose(Some(&data[..]));
    match frame.body {
        Body::Window { start_index, items } => {
            assert_eq!(start_index, 12); // (500 + 10) / 40
            assert_eq!(items.len(), 8);
        }
        other => panic!("expected window, got {other:?}"),
    }
}

#[test]
fn absent_collection_degrades_to_no_ops() {
    let (mut view, hits) = counting_view(ViewOptions::new(40));
    let out = view.on_scroll(ScrollSample::new(500, 300, 800, 0)).unwrap();
    assert!(!out.reached_bottom);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let frame = view.compose::<String>(None);
    assert_eq!(frame.body, Body::Empty);
    assert_eq!(frame.content_px, 0);
    assert_eq!(frame.probe, None);

    // Fast scrolling has nothing to stand in for without a collection.
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 1_000));
    view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 1_050));
    assert!(view.is_fast_scrolling());
    let frame = view.compose::<String>(None);
    assert_eq!(frame.body, Body::Empty);
    assert!(!frame.is_placeholder_body());
    assert_eq!(rows(&frame).len(), 1);
}

#[test]
fn repeating_the_loading_flag_keeps_the_latch_closed() {
    let (mut view, hits) = counting_view(ViewOptions::new(40));
    view.set_item_count(Some(20));

    view.on_scroll(ScrollSample::new(500, 300, 800, 0));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // A host that reports its unchanged flag every frame.
    for t in 1..=3u64 {
        view.set_bottom_loading(false);
        view.on_scroll(ScrollSample::new(500, 300, 800, t * 16));
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(view.is_bottom_latched());

    view.set_bottom_loading(true);
    view.set_bottom_loading(true);
    assert!(view.bottom_loading());
    view.set_bottom_loading(false);
    view.on_scroll(ScrollSample::new(500, 300, 800, 100));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn bottom_loading_flag_drives_latch_and_loader() {
    let (mut view, hits) = counting_view(ViewOptions::new(40).with_bottom_loader_count(3));
    let mut data = items(20);
    view.set_item_count(Some(data.len()));

    view.on_scroll(ScrollSample::new(500, 300, 800, 0));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    view.set_bottom_loading(true);
    assert_eq!(
        view.compose(Some(&data[..])).bottom,
        BottomIndicator::Placeholders {
            count: 3,
            row: PlaceholderRow {
                height: 40,
                width: None,
                margin: 4
            }
        }
    );
    view.on_scroll(ScrollSample::new(500, 300, 800, 100));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // Host appends a page, then clears its loading flag.
    data.extend(items(20));
    view.set_item_count(Some(data.len()));
    view.set_bottom_loading(false);
    assert_eq!(view.compose(Some(&data[..])).bottom, BottomIndicator::None);

    view.on_scroll(ScrollSample::new(1_000, 300, 1_600, 1_000));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    view.on_scroll(ScrollSample::new(1_300, 300, 1_600, 2_000));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn custom_bottom_loader_replaces_placeholder_rows() {
    let mut view = WindowedListView::new(
        ViewOptions::new(40)
            .with_bottom_loader_count(3)
            .with_custom_bottom_loader(),
    );
    let data = items(5);
    view.set_item_count(Some(data.len()));
    view.set_bottom_loading(true);

    let frame = view.compose(Some(&data[..]));
    assert_eq!(frame.bottom, BottomIndicator::Custom);
    let all = rows(&frame);
    assert_eq!(all.last(), Some(&Row::CustomLoader));
    assert!(!all.iter().any(|r| matches!(r, Row::Placeholder(_))));
}

#[test]
fn measurement_bootstrap_sizes_placeholders() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut view = WindowedListView::new(ViewOptions::new(40).with_measure_item(Some({
        let calls = Arc::clone(&calls);
        move |index: usize| {
            calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(index, 0);
            Some(Rect {
                main: 40,
                cross: 300,
            })
        }
    })));

    view.set_item_count(Some(0));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    view.set_item_count(Some(20));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    view.set_item_count(Some(40));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(
        view.measured_item(),
        Some(Rect {
            main: 40,
            cross: 300
        })
    );
    view.set_bottom_loading(true);
    let data = items(40);
    match view.compose(Some(&data[..])).bottom {
        BottomIndicator::Placeholders { row, .. } => assert_eq!(row.width, Some(270)),
        other => panic!("expected placeholders, got {other:?}"),
    }
}

#[test]
fn measure_probe_is_rendered_until_measured() {
    let mut view = WindowedListView::new(ViewOptions::new(40).with_item_ref_key("containerRef"));
    let data = items(3);
    view.set_item_count(Some(data.len()));

    let frame = view.compose(Some(&data[..]));
    assert_eq!(
        frame.probe,
        Some(MeasureProbe {
            index: 0,
            ref_key: "containerRef"
        })
    );
    let all = rows(&frame);
    assert_eq!(all[0], Row::Spacer { height: 0 });
    assert_eq!(
        all[1],
        Row::Probe {
            index: 0,
            item: &data[0],
            ref_key: "containerRef"
        }
    );

    view.set_item_measurement(Rect {
        main: 40,
        cross: 200,
    });
    let frame = view.compose(Some(&data[..]));
    assert_eq!(frame.probe, None);
    assert!(!rows(&frame).iter().any(|r| matches!(r, Row::Probe { .. })));
}

#[test]
fn item_count_change_recomputes_window_at_last_offset() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    view.set_item_count(Some(20));
    view.on_scroll(ScrollSample::new(400, 300, 800, 0));
    assert_eq!(view.window().total_content_px, 800);

    view.set_item_count(Some(40));
    let w = view.window();
    assert_eq!(w.start_index, 10);
    assert_eq!(w.total_content_px, 1_600);
}

#[test]
fn unmount_cancels_timer_and_silences_everything() {
    let (mut view, hits) = counting_view(ViewOptions::new(40));
    view.set_item_count(Some(1_000));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    let timer = view
        .on_scroll(ScrollSample::new(4_000, 300, 40_000, 50))
        .unwrap()
        .settle_timer
        .unwrap();

    view.unmount();
    assert!(!view.is_mounted());
    assert_eq!(view.state().settle_timer(), None);
    assert!(!view.on_settle_timer(timer.id));
    assert!(!view.tick(10_000));
    assert_eq!(view.on_scroll(ScrollSample::new(39_700, 300, 40_000, 100)), None);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn views_do_not_share_scroll_state() {
    let mut a = WindowedListView::new(ViewOptions::new(40));
    let mut b = WindowedListView::new(ViewOptions::new(40));
    a.set_item_count(Some(1_000));
    b.set_item_count(Some(1_000));

    a.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    b.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    a.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50));
    let out = b.on_scroll(ScrollSample::new(40, 300, 40_000, 1_000)).unwrap();

    assert!(a.is_fast_scrolling());
    assert!(!b.is_fast_scrolling());
    assert!(!out.reading.is_fast);
    assert!(b.state().settle_timer().is_none());
}

#[test]
fn disabling_fast_scroll_keeps_real_window() {
    let mut view = WindowedListView::new(
        ViewOptions::new(40).with_window_options(|w| w.with_fast_scroll_enabled(false)),
    );
    view.set_item_count(Some(1_000));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    let out = view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50)).unwrap();
    assert!(out.reading.is_fast);
    assert_eq!(out.phase, ScrollPhase::Settled);
    assert_eq!(out.settle_timer, None);
}

#[test]
fn update_options_turning_fast_scroll_off_settles_immediately() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    view.set_item_count(Some(1_000));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50));
    assert!(view.is_fast_scrolling());

    view.update_options(|o| o.window = o.window.with_fast_scroll_enabled(false));
    assert!(!view.is_fast_scrolling());
    assert_eq!(view.state().settle_timer(), None);
}

#[test]
fn loaded_items_controls_window_and_placeholders() {
    let mut view = WindowedListView::new(ViewOptions::from_window(
        WindowOptions::new(40).with_loaded_items(10),
    ));
    let data = items(1_000);
    view.set_item_count(Some(data.len()));
    view.on_scroll(ScrollSample::new(0, 300, 40_000, 0));
    assert_eq!(view.compose(Some(&data[..])).body, Body::Window {
        start_index: 0,
        items: &data[0..10],
    });

    view.on_scroll(ScrollSample::new(4_000, 300, 40_000, 50));
    assert_eq!(view.render_mode(), RenderMode::Placeholders { count: 10 });
}

#[test]
fn scroll_to_index_clamps_to_scrollable_range() {
    let mut view = WindowedListView::new(ViewOptions::new(40));
    assert_eq!(view.scroll_to_index(5), 200);

    view.set_item_count(Some(20));
    view.on_scroll(ScrollSample::new(0, 300, 800, 0));
    assert_eq!(view.scroll_to_index(5), 200);
    assert_eq!(view.scroll_to_index(19), 500);
    assert_eq!(view.scroll_to_offset(10_000), 500);
}

#[test]
fn example_load_more_smoke() {
    // Mirrors examples/load_more.rs: pages of 20 items, loader toggled by the host.
    let (mut view, hits) = counting_view(ViewOptions::new(40).with_bottom_loader_count(3));
    let mut data = items(20);
    view.set_item_count(Some(data.len()));

    let mut now = 0u64;
    for _ in 0..3 {
        let content = data.len() as u64 * 40;
        let mut offset = 0u64;
        while offset + 300 < content {
            offset += 20;
            now += 16;
            view.on_scroll(ScrollSample::new(offset, 300, content, now));
            view.tick(now);
        }
        view.set_bottom_loading(true);
        now += 3_000;
        data.extend(items(20));
        view.set_item_count(Some(data.len()));
        view.set_bottom_loading(false);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 3);
    assert_eq!(data.len(), 80);
}
