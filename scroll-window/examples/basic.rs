// Example: drive the engine pieces by hand from a simulated scroll stream.
use scroll_window::{
    BottomSentinel, PlaceholderPolicy, RenderMode, ScrollMetrics, ScrollSample, ScrollState,
    WindowCalculator, WindowOptions,
};

fn main() {
    let opts = WindowOptions::new(40);
    let window = WindowCalculator::from_options(&opts);
    let metrics = ScrollMetrics::new(opts.fast_scroll_threshold);
    let policy = PlaceholderPolicy::from_options(&opts);
    let mut sentinel = BottomSentinel::new(opts.bottom_tolerance_px);
    let mut state = ScrollState::new();

    let count = 1_000usize;
    let content = window.total_content_px(count);

    for (i, offset) in [0u64, 400, 8_000, 20_000, 39_700].into_iter().enumerate() {
        let sample = ScrollSample::new(offset, 300, content, i as u64 * 16);
        let reading = metrics.observe(&mut state, sample);
        policy.on_sample(&mut state, &reading, &sample);

        let range = window.compute(offset, count);
        let mode = policy.render_mode(&state);
        println!(
            "offset={offset} speed={:.1} window={:?} mode={:?}",
            reading.speed,
            range.slice_range(count),
            mode
        );
        if mode == RenderMode::Window && sentinel.observe(&sample) {
            println!("reached bottom: load more");
        }
    }

    // Settle back once the stream goes idle.
    if policy.tick(&mut state, 10_000) {
        println!("settled: mode={:?}", policy.render_mode(&state));
    }
}
