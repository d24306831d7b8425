//! Strongly-typed primitives for the scale bar (zero-cost newtypes).
//!
//! Configuration sizes are held in density-independent pixels ([`Dp`]) and
//! only become device pixels through a [`Density`]. Screen geometry is plain
//! `f64` device pixels carried in `glam::DVec2` and [`Rect`].

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use glam::DVec2;

use crate::errors::ConfigError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in density-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Dp(pub f64);

impl Dp {
    /// Create a Dp (const-friendly, unchecked).
    /// Use `try_positive` for user-provided values.
    #[inline]
    pub const fn new(val: f64) -> Dp {
        Dp(val)
    }

    /// Create a strictly positive, finite Dp
    #[inline]
    pub fn try_positive(val: f64) -> Result<Dp, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Dp(val))
        }
    }

    /// Get the larger of two lengths
    #[inline]
    pub fn max(self, other: Dp) -> Dp {
        Dp(self.0.max(other.0))
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;
    fn mul(self, rhs: f64) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Div<f64> for Dp {
    type Output = Dp;
    fn div(self, rhs: f64) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

/// Converts density-independent pixels to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pixels_per_dp: f64,
}

impl Density {
    /// One device pixel per dp.
    pub const IDENTITY: Density = Density { pixels_per_dp: 1.0 };

    /// Create a Density with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(pixels_per_dp: f64) -> Result<Self, NumericError> {
        Dp::try_positive(pixels_per_dp).map(|d| Density {
            pixels_per_dp: d.raw(),
        })
    }

    /// Device pixels per dp.
    pub fn pixels_per_dp(&self) -> f64 {
        self.pixels_per_dp
    }

    /// Convert to whole device pixels, rounding half away from zero.
    pub fn px(&self, dp: Dp) -> f64 {
        (dp.0 * self.pixels_per_dp).round()
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::IDENTITY
    }
}

/// Axis-aligned rectangle in device pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect {
            min: DVec2::new(left, top),
            max: DVec2::new(right, bottom),
        }
    }

    pub fn left(&self) -> f64 {
        self.min.x
    }

    pub fn top(&self) -> f64 {
        self.min.y
    }

    pub fn right(&self) -> f64 {
        self.max.x
    }

    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// The same rectangle moved by `offset`.
    pub fn translate(self, offset: DVec2) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Non-premultiplied 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    pub const LIGHT_GRAY: Color = Color::from_argb(0xFFCC_CCCC);

    /// Build a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Color {
        Color {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::invalid("color", format!("expected #RRGGBB or #AARRGGBB, got {s:?}"));
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Color::from_argb(0xFF00_0000 | value)),
            8 => Ok(Color::from_argb(value)),
            _ => Err(invalid()),
        }
    }
}

/// Font weight used when measuring and drawing labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

/// A typeface: family name plus weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typeface {
    family: String,
    weight: FontWeight,
}

impl Typeface {
    /// Create a typeface; the family name must not be blank.
    pub fn new(family: impl Into<String>, weight: FontWeight) -> Result<Self, ConfigError> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(ConfigError::invalid("typeface", "family name is empty"));
        }
        Ok(Typeface { family, weight })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface {
            family: String::from("sans-serif"),
            weight: FontWeight::Bold,
        }
    }
}

/// A typeface at a concrete pixel size, as handed to text measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub typeface: Typeface,
    pub size_px: f64,
}
