//! Umbrella crate for the zktx library.

pub use zktx_core as core;
pub use zktx_primitives as primitives;

pub use zktx_helpers::{dev_debug, dev_error, dev_info, dev_trace, dev_warn};
