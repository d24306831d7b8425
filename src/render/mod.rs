//! Geometry for the five scale bar styles
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, colors and settings
//! - `context`: RenderContext with the configuration resolved to device pixels
//! - `scene`: The primitives a renderer emits
//! - `path_builder`: Polyline paths for the line styles
//! - `geometry`: Drawing pieces shared by several styles
//! - `styles`: One renderer per style

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod scene;
pub mod styles;

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

// Re-export commonly used items
pub use context::RenderContext;
pub use path_builder::{Path, PathBuilder, PathCommand};
pub use scene::{LineCap, LineJoin, Paint, Primitive, Scene, Stroke, TextAlign, TextPaint};
pub use styles::{
    AlternatingBarRenderer, BarRenderer, DualUnitLineRenderer, GraduatedLineRenderer, LineRenderer,
};

use crate::errors::ConfigError;
use crate::layout::Extents;
use crate::nice::label_string;
use crate::units::{LinearUnit, UnitSystem};

/// Everything a renderer needs to know about the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFrame {
    pub extents: Extents,
    /// Displayed distance, in `unit`.
    pub value: f64,
    pub unit: &'static LinearUnit,
    /// System the bar is configured for; the dual-unit line reads the other.
    pub unit_system: UnitSystem,
    /// Always at least 1; only segmented styles use it.
    pub segment_count: u32,
}

impl ScaleFrame {
    /// "`value unit`", as printed under unsegmented bars.
    pub fn label(&self) -> String {
        format!("{} {}", label_string(self.value), self.unit.abbreviation())
    }
}

/// Behavior shared by every style.
#[enum_dispatch]
pub trait StyleRenderer {
    /// Whether the bar is divided into labelled segments.
    fn is_segmented(&self) -> bool {
        false
    }

    /// Whether the unit is printed as a suffix past the right end, which
    /// right alignment must leave room for.
    fn trailing_units(&self) -> bool {
        false
    }

    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene;
}

/// The closed set of renderers.
#[enum_dispatch(StyleRenderer)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renderer {
    BarRenderer,
    AlternatingBarRenderer,
    LineRenderer,
    GraduatedLineRenderer,
    DualUnitLineRenderer,
}

/// Visual style of the scale bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// A solid bar, labelled with the full length.
    Bar,
    /// A bar of alternating colored segments, each boundary labelled.
    #[default]
    AlternatingBar,
    /// A line with end ticks, labelled with the full length.
    Line,
    /// A line with a labelled tick at each segment boundary.
    GraduatedLine,
    /// A line labelled in both unit systems.
    DualUnitLine,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Bar,
        Style::AlternatingBar,
        Style::Line,
        Style::GraduatedLine,
        Style::DualUnitLine,
    ];

    pub fn renderer(self) -> Renderer {
        match self {
            Style::Bar => BarRenderer.into(),
            Style::AlternatingBar => AlternatingBarRenderer.into(),
            Style::Line => LineRenderer.into(),
            Style::GraduatedLine => GraduatedLineRenderer.into(),
            Style::DualUnitLine => DualUnitLineRenderer.into(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Bar => "BAR",
            Style::AlternatingBar => "ALTERNATING_BAR",
            Style::Line => "LINE",
            Style::GraduatedLine => "GRADUATED_LINE",
            Style::DualUnitLine => "DUAL_UNIT_LINE",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the upper-case names (`ALTERNATING_BAR`) in any case, with `-`
/// or `_` as separator.
impl FromStr for Style {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Style::ALL
            .into_iter()
            .find(|style| style.name() == normalized)
            .ok_or_else(|| ConfigError::invalid("style", format!("unknown style {s:?}")))
    }
}
