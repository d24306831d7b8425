//! Error types with diagnostics using miette
//!
//! Configuration mistakes are reported to the caller; problems found while
//! computing a frame never are. They become a [`SkipReason`], get logged, and
//! the frame is simply not drawn.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors returned by configuration setters and attribute parsing.
///
/// When a setter returns one of these the previous configuration stays in
/// effect and no redraw is requested.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    #[diagnostic(code(scalebar::config::invalid_argument))]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid {name}: {source}")]
    #[diagnostic(
        code(scalebar::config::invalid_size),
        help("sizes are density-independent pixels and must be finite and positive")
    )]
    InvalidSize {
        name: &'static str,
        #[source]
        source: NumericError,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Frame Skips
// ============================================================================

/// Why a computation pass produced nothing this frame.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    #[error("screen point cannot be resolved to a geographic location")]
    #[diagnostic(
        code(scalebar::frame::unresolvable_geometry),
        help("the map probably has no spatial reference yet")
    )]
    UnresolvableGeometry,

    #[error("degenerate input: {what} is {value}")]
    #[diagnostic(code(scalebar::frame::degenerate_input))]
    DegenerateInput { what: &'static str, value: f64 },
}
