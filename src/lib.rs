//! Scale computation and adaptive layout for map scale bars.
//!
//! Given the maximum on-screen length a scale bar may take and the ground
//! distance that length spans on the current map, this crate derives a round
//! ("nice") distance to show, picks a legible unit, decides how many labelled
//! segments a graduated or alternating bar gets, and lays out the pixel
//! geometry of five bar styles as a [`Scene`] for the host to paint.
//!
//! ```
//! use glam::DVec2;
//! use scalebar::{Config, GeoPoint, LinearUnit, MapViewport, ProportionalTextMeasure, Rect, Scalebar};
//!
//! /// A map that reports 12.345 km across any horizontal span.
//! struct Map;
//!
//! impl MapViewport for Map {
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 1200.0, 800.0)
//!     }
//!     fn screen_to_geographic(&self, p: DVec2) -> Option<GeoPoint> {
//!         Some(GeoPoint::new(0.0, p.x))
//!     }
//!     fn geodesic_length(&self, _: GeoPoint, _: GeoPoint, unit: &LinearUnit) -> f64 {
//!         LinearUnit::METERS.convert_to(unit, 12_345.0)
//!     }
//! }
//!
//! let bar = Scalebar::new(Config::default());
//! let result = bar.compute(&Map, &ProportionalTextMeasure::default()).unwrap();
//! assert_eq!(result.value, 10.0);
//! assert_eq!(result.unit.abbreviation(), "km");
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod nice;
pub mod render;
pub mod scalebar;
pub mod segments;
pub mod types;
pub mod units;
pub mod viewport;

pub use config::Config;
pub use errors::{ConfigError, SkipReason};
pub use layout::{Alignment, Placement};
pub use nice::{best_length, label_string};
pub use render::{Primitive, Scene, Style};
pub use scalebar::{ScaleResult, Scalebar};
pub use segments::segment_count;
pub use types::{Color, Density, Dp, FontWeight, Rect, Typeface};
pub use units::{LinearUnit, LinearUnitId, UnitSystem, select_linear_unit};
pub use viewport::{GeoPoint, MapViewport, MercatorViewport, ProportionalTextMeasure, TextMeasure};
