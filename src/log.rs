//! Conditional logging macros for the scale computation pass.
//!
//! With the `tracing` feature the crate logs through `tracing`; the frame
//! pass emits `debug!` events for the geodetic and nice lengths it derives and
//! for every skipped frame, and `warn!` for rejected configuration attributes.
//! Without the feature every macro expands to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
