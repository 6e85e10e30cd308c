/// Emit a `TRACE` event when dev logging is compiled in.
#[macro_export]
macro_rules! dev_trace {
    ($($arg:tt)*) => {
        {
            #[cfg(any(feature = "dev", test))]
            $crate::tracing::trace!($($arg)*);
        }
    };
}

/// Emit a `DEBUG` event when dev logging is compiled in.
#[macro_export]
macro_rules! dev_debug {
    ($($arg:tt)*) => {
        {
            #[cfg(any(feature = "dev", test))]
            $crate::tracing::debug!($($arg)*);
        }
    };
}

/// Emit an `INFO` event when dev logging is compiled in.
#[macro_export]
macro_rules! dev_info {
    ($($arg:tt)*) => {
        {
            #[cfg(any(feature = "dev", test))]
            $crate::tracing::info!($($arg)*);
        }
    };
}

/// Emit a `WARN` event when dev logging is compiled in.
#[macro_export]
macro_rules! dev_warn {
    ($($arg:tt)*) => {
        {
            #[cfg(any(feature = "dev", test))]
            $crate::tracing::warn!($($arg)*);
        }
    };
}

/// Emit an `ERROR` event when dev logging is compiled in.
#[macro_export]
macro_rules! dev_error {
    ($($arg:tt)*) => {
        {
            #[cfg(any(feature = "dev", test))]
            $crate::tracing::error!($($arg)*);
        }
    };
}
