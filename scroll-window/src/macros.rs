// Logging shim shared with `scroll-window-adapter`: every level compiles to nothing unless the
// `tracing` feature is enabled on this crate.
#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! __wlog {
    ($level:ident, $target:literal, $($tt:tt)*) => {
        $crate::__private::tracing::$level!(target: $target, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __wlog {
    ($level:ident, $target:literal, $($tt:tt)*) => {};
}

macro_rules! wtrace {
    ($($tt:tt)*) => { $crate::__wlog!(trace, "scroll_window", $($tt)*) };
}

macro_rules! wdebug {
    ($($tt:tt)*) => { $crate::__wlog!(debug, "scroll_window", $($tt)*) };
}

macro_rules! wwarn {
    ($($tt:tt)*) => { $crate::__wlog!(warn, "scroll_window", $($tt)*) };
}
