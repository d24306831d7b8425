//! Screen placement of the scale bar.

use std::str::FromStr;

use crate::errors::ConfigError;
use crate::types::Rect;

/// Horizontal anchoring of the bar. Orthogonal to [`crate::Style`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// The left end stays put and the bar grows to the right.
    #[default]
    Left,
    /// The right end (plus any trailing unit label) stays put.
    Right,
    /// The center stays put and the bar grows at both ends.
    Center,
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LEFT" => Ok(Alignment::Left),
            "RIGHT" => Ok(Alignment::Right),
            "CENTER" => Ok(Alignment::Center),
            _ => Err(ConfigError::invalid("alignment", format!("unknown alignment {s:?}"))),
        }
    }
}

/// Where the widget lives relative to the map.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Placement {
    /// Overlaid on the map view, near its bottom edge.
    #[default]
    InMapView,
    /// In its own host-managed box of the given size.
    Standalone { width: f64, height: f64 },
}

/// Horizontal span the bar is laid out within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub left: f64,
    pub right: f64,
    pub padding: f64,
}

impl Container {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Pixel extents of the bar itself (labels fall outside).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Extents {
    pub fn length(&self) -> f64 {
        self.right - self.left
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// X coordinate of the left end of a bar `length` pixels long.
///
/// `extra_units_width` is the width of a unit suffix printed past the right
/// end; it only matters for right alignment.
pub fn left_position(
    alignment: Alignment,
    length: f64,
    container: Container,
    line_width: f64,
    extra_units_width: f64,
) -> f64 {
    match alignment {
        Alignment::Left => container.left + container.padding,
        Alignment::Right => {
            container.right - container.padding - line_width - length - extra_units_width
        }
        Alignment::Center => (container.right + container.left - length) / 2.0,
    }
}

/// Longest the bar may be when overlaid on a map of the given size: a quarter
/// of the width in landscape, a third in portrait.
pub fn max_length_in_map_view(map_width: f64, map_height: f64) -> f64 {
    if map_width > map_height {
        (map_width / 4.0).floor()
    } else {
        (map_width / 3.0).floor()
    }
}

/// Vertical inputs for placing the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSpace {
    /// Y of the bottom edge of the area the bar sits in.
    pub bottom_edge: f64,
    /// Space reserved below the bar: attribution text, view insets and padding.
    pub reserved_bottom: f64,
    pub text_size: f64,
    pub bar_height: f64,
}

/// Top and bottom of the bar, leaving a line of text below it.
pub fn vertical_position(space: VerticalSpace) -> (f64, f64) {
    let bottom = space.bottom_edge - space.reserved_bottom - space.text_size;
    (bottom - space.bar_height, bottom)
}
