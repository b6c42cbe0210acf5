//! Logging macros that forward to the `log` facade when the `logging`
//! feature is enabled and compile to nothing otherwise.

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)+) => { log::info!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)+) => {{ let _ = format_args!($($arg)+); }};
}
