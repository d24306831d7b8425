//! Interfaces to the map view and the text engine.
//!
//! The scale bar never owns map state. It asks a [`MapViewport`] for the
//! current screen bounds, the ground location under two screen points and the
//! geodesic distance between them, and asks a [`TextMeasure`] how wide a label
//! will be. Reference implementations of both are provided for hosts without
//! their own and for tests.

use glam::DVec2;

use crate::types::{Density, Font, FontWeight, Rect};
use crate::units::LinearUnit;

/// A location on the ellipsoid, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// The map view the scale bar measures.
pub trait MapViewport {
    /// Pixel bounds of the map view.
    fn bounds(&self) -> Rect;

    /// Space reserved at the bottom of the view (system bars and the like).
    fn inset_bottom(&self) -> f64 {
        0.0
    }

    /// Ground location under a screen point, or `None` while the view has no
    /// spatial reference.
    fn screen_to_geographic(&self, point: DVec2) -> Option<GeoPoint>;

    /// True ground distance between two locations, in `unit`.
    fn geodesic_length(&self, a: GeoPoint, b: GeoPoint, unit: &LinearUnit) -> f64;

    /// Device pixels per density-independent pixel.
    fn density(&self) -> Density {
        Density::IDENTITY
    }
}

/// Measures rendered text.
pub trait TextMeasure {
    /// Advance width of `text` in device pixels.
    fn text_width(&self, text: &str, font: &Font) -> f64;
}

// ============================================================================
// Reference viewport
// ============================================================================

/// WGS84 mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Web Mercator semi-major axis in meters.
const MERCATOR_RADIUS_METERS: f64 = 6_378_137.0;

/// A spherical Web Mercator view: a center, a resolution and a pixel box.
#[derive(Clone, Debug, PartialEq)]
pub struct MercatorViewport {
    bounds: Rect,
    center: Option<GeoPoint>,
    /// Projected meters per device pixel.
    resolution: f64,
    inset_bottom: f64,
    density: Density,
}

impl MercatorViewport {
    pub fn new(bounds: Rect, center: GeoPoint, resolution: f64) -> Self {
        MercatorViewport {
            bounds,
            center: Some(center),
            resolution,
            inset_bottom: 0.0,
            density: Density::IDENTITY,
        }
    }

    /// A view that cannot resolve any screen point yet.
    pub fn without_spatial_reference(bounds: Rect) -> Self {
        MercatorViewport {
            bounds,
            center: None,
            resolution: 1.0,
            inset_bottom: 0.0,
            density: Density::IDENTITY,
        }
    }

    pub fn with_inset_bottom(mut self, inset: f64) -> Self {
        self.inset_bottom = inset;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Zoom by `factor` (> 1 zooms in).
    pub fn zoom(&mut self, factor: f64) {
        self.resolution /= factor;
    }

    fn project(p: GeoPoint) -> DVec2 {
        let x = MERCATOR_RADIUS_METERS * p.lon.to_radians();
        let y = MERCATOR_RADIUS_METERS * (std::f64::consts::FRAC_PI_4 + p.lat.to_radians() / 2.0).tan().ln();
        DVec2::new(x, y)
    }

    fn unproject(m: DVec2) -> GeoPoint {
        let lon = (m.x / MERCATOR_RADIUS_METERS).to_degrees();
        let lat = (2.0 * (m.y / MERCATOR_RADIUS_METERS).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees();
        GeoPoint { lat, lon }
    }
}

impl MapViewport for MercatorViewport {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn inset_bottom(&self) -> f64 {
        self.inset_bottom
    }

    fn screen_to_geographic(&self, point: DVec2) -> Option<GeoPoint> {
        let center = self.center?;
        let offset = point - self.bounds.center();
        // screen y grows downward, projected y grows northward
        let projected = Self::project(center) + DVec2::new(offset.x, -offset.y) * self.resolution;
        let geo = Self::unproject(projected);
        (geo.lat.is_finite() && geo.lon.is_finite()).then_some(geo)
    }

    fn geodesic_length(&self, a: GeoPoint, b: GeoPoint, unit: &LinearUnit) -> f64 {
        LinearUnit::METERS.convert_to(unit, haversine_meters(a, b))
    }

    fn density(&self) -> Density {
        self.density
    }
}

/// Great-circle distance on the mean-radius sphere.
pub fn haversine_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}

// ============================================================================
// Reference text measurement
// ============================================================================

/// Advance widths of printable ASCII (0x20..=0x7E) in hundredths of an em.
#[rustfmt::skip]
const GLYPH_ADVANCE: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Advance for characters outside the table.
const DEFAULT_ADVANCE: u32 = 100;

/// Sum of advances, in hundredths of an em.
fn advance_hundredths(text: &str) -> u32 {
    text.chars()
        .map(|c| match c {
            ' '..='~' => GLYPH_ADVANCE[c as usize - 0x20] as u32,
            _ => DEFAULT_ADVANCE,
        })
        .sum()
}

/// Estimates widths from a proportional advance table.
///
/// The table is tuned for a proportional sans-serif at 0.6 em per digit; bold
/// text is widened by `bold_factor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalTextMeasure {
    /// Em size, relative to the font size in pixels.
    pub em_scale: f64,
    pub bold_factor: f64,
}

impl Default for ProportionalTextMeasure {
    fn default() -> Self {
        ProportionalTextMeasure {
            em_scale: 0.6,
            bold_factor: 1.1,
        }
    }
}

impl TextMeasure for ProportionalTextMeasure {
    fn text_width(&self, text: &str, font: &Font) -> f64 {
        let em = font.size_px * self.em_scale;
        let weight = match font.typeface.weight() {
            FontWeight::Bold => self.bold_factor,
            FontWeight::Normal => 1.0,
        };
        advance_hundredths(text) as f64 * 0.01 * em * weight
    }
}
