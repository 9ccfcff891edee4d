// Reuses the engine's logging shim under this crate's target.
macro_rules! wtrace {
    ($($tt:tt)*) => { scroll_window::__wlog!(trace, "scroll_window_adapter", $($tt)*) };
}

macro_rules! wdebug {
    ($($tt:tt)*) => { scroll_window::__wlog!(debug, "scroll_window_adapter", $($tt)*) };
}

macro_rules! wwarn {
    ($($tt:tt)*) => { scroll_window::__wlog!(warn, "scroll_window_adapter", $($tt)*) };
}
