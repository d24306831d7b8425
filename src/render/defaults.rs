//! Default sizes and colors.
//!
//! Sizes are density-independent pixels unless the name says `_PX`.

use crate::layout::Alignment;
use crate::types::{Color, Dp};
use crate::units::UnitSystem;

use super::Style;

pub const STYLE: Style = Style::AlternatingBar;
pub const ALIGNMENT: Alignment = Alignment::Left;
pub const UNIT_SYSTEM: UnitSystem = UnitSystem::Metric;

pub const FILL_COLOR: Color = Color::LIGHT_GRAY.with_alpha(0x80);
pub const ALTERNATE_FILL_COLOR: Color = Color::BLACK;
pub const LINE_COLOR: Color = Color::WHITE;
pub const SHADOW_COLOR: Color = Color::BLACK.with_alpha(0x80);
pub const TEXT_COLOR: Color = Color::BLACK;
pub const TEXT_SHADOW_COLOR: Color = Color::WHITE;

pub const TEXT_SIZE: Dp = Dp::new(15.0);
pub const BAR_HEIGHT: Dp = Dp::new(10.0);
pub const X_PADDING: Dp = Dp::new(10.0);
pub const Y_PADDING: Dp = Dp::new(10.0);
/// Space kept between adjacent segment labels.
pub const LABEL_X_PAD: Dp = Dp::new(6.0);

/// Lower bound for the derived line width and corner radius.
pub const MIN_DERIVED_SIZE: Dp = Dp::new(1.0);
/// Line width is this fraction of the bar height.
pub const LINE_WIDTH_RATIO: f64 = 0.25;
/// Corner radius is this fraction of the bar height.
pub const CORNER_RADIUS_RATIO: f64 = 0.2;

pub const SHADOW_OFFSET_PX: f64 = 2.0;
pub const TEXT_SHADOW_BLUR_PX: f64 = 2.0;

/// Unit whose suffix sizes the gap at the end of a standalone bar.
pub const STANDALONE_UNITS_PROBE: &str = " mm";
