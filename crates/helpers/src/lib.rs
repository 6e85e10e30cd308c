//! Logging helpers shared by the zktx crates.
//!
//! The `dev_*` macros forward to [`tracing`] when the `dev` feature is enabled (or under
//! `cfg(test)`) and expand to nothing otherwise, so release builds of the encoder carry no
//! logging code at all.

#[cfg(any(feature = "dev", test))]
pub use tracing;

#[macro_use]
mod macros;
