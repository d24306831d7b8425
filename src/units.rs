//! Linear units, unit systems and display-unit selection.
//!
//! Every unit carries its size in meters, so any two units convert through
//! the meter regardless of the system they belong to.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Identity of a linear unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinearUnitId {
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
}

/// An immutable linear unit. Instances are `'static` constants shared by
/// reference.
#[derive(Debug, PartialEq)]
pub struct LinearUnit {
    id: LinearUnitId,
    abbreviation: &'static str,
    meters_per_unit: f64,
}

impl LinearUnit {
    pub const MILLIMETERS: LinearUnit = LinearUnit::new(LinearUnitId::Millimeters, "mm", 0.001);
    pub const CENTIMETERS: LinearUnit = LinearUnit::new(LinearUnitId::Centimeters, "cm", 0.01);
    pub const METERS: LinearUnit = LinearUnit::new(LinearUnitId::Meters, "m", 1.0);
    pub const KILOMETERS: LinearUnit = LinearUnit::new(LinearUnitId::Kilometers, "km", 1000.0);
    pub const INCHES: LinearUnit = LinearUnit::new(LinearUnitId::Inches, "in", 0.0254);
    pub const FEET: LinearUnit = LinearUnit::new(LinearUnitId::Feet, "ft", 0.3048);
    pub const YARDS: LinearUnit = LinearUnit::new(LinearUnitId::Yards, "yd", 0.9144);
    pub const MILES: LinearUnit = LinearUnit::new(LinearUnitId::Miles, "mi", 1609.344);
    pub const NAUTICAL_MILES: LinearUnit = LinearUnit::new(LinearUnitId::NauticalMiles, "nmi", 1852.0);

    const fn new(id: LinearUnitId, abbreviation: &'static str, meters_per_unit: f64) -> Self {
        LinearUnit {
            id,
            abbreviation,
            meters_per_unit,
        }
    }

    /// Look up the shared constant for an id.
    pub fn from_id(id: LinearUnitId) -> &'static LinearUnit {
        match id {
            LinearUnitId::Millimeters => &Self::MILLIMETERS,
            LinearUnitId::Centimeters => &Self::CENTIMETERS,
            LinearUnitId::Meters => &Self::METERS,
            LinearUnitId::Kilometers => &Self::KILOMETERS,
            LinearUnitId::Inches => &Self::INCHES,
            LinearUnitId::Feet => &Self::FEET,
            LinearUnitId::Yards => &Self::YARDS,
            LinearUnitId::Miles => &Self::MILES,
            LinearUnitId::NauticalMiles => &Self::NAUTICAL_MILES,
        }
    }

    pub fn id(&self) -> LinearUnitId {
        self.id
    }

    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    pub fn meters_per_unit(&self) -> f64 {
        self.meters_per_unit
    }

    /// The unit system this unit is measured in, if it belongs to one of
    /// the two supported systems.
    pub fn system(&self) -> Option<UnitSystem> {
        match self.id {
            LinearUnitId::Millimeters
            | LinearUnitId::Centimeters
            | LinearUnitId::Meters
            | LinearUnitId::Kilometers => Some(UnitSystem::Metric),
            LinearUnitId::Inches | LinearUnitId::Feet | LinearUnitId::Yards | LinearUnitId::Miles => {
                Some(UnitSystem::Imperial)
            }
            LinearUnitId::NauticalMiles => None,
        }
    }

    /// Convert `value`, expressed in this unit, into `target`.
    pub fn convert_to(&self, target: &LinearUnit, value: f64) -> f64 {
        debug_assert!(target.meters_per_unit != 0.0);
        if self.id == target.id {
            return value;
        }
        value * self.meters_per_unit / target.meters_per_unit
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation)
    }
}

/// The measurement system the scale bar reports in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// The unit geodetic lengths are measured in before reduction.
    pub fn base_unit(self) -> &'static LinearUnit {
        match self {
            UnitSystem::Metric => &LinearUnit::METERS,
            UnitSystem::Imperial => &LinearUnit::FEET,
        }
    }

    /// The system shown on the secondary side of a dual-unit line.
    pub fn other(self) -> UnitSystem {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Display units in ascending size, each with the value (in the base
    /// unit) from which it takes over.
    fn display_thresholds(self) -> &'static [(&'static LinearUnit, f64)] {
        match self {
            UnitSystem::Metric => &[(&LinearUnit::METERS, 0.0), (&LinearUnit::KILOMETERS, 1000.0)],
            // miles from half a mile up
            UnitSystem::Imperial => &[(&LinearUnit::FEET, 0.0), (&LinearUnit::MILES, 2640.0)],
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "METRIC" => Ok(UnitSystem::Metric),
            "IMPERIAL" => Ok(UnitSystem::Imperial),
            _ => Err(ConfigError::invalid("unit system", format!("unknown unit system {s:?}"))),
        }
    }
}

/// Relative slack applied at unit thresholds so that values which are the
/// threshold up to float noise (for example 0.5 mi converted to feet) land on
/// the larger unit.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// Choose the unit a length should be displayed in.
///
/// `value` is in `system`'s base unit. The largest unit whose threshold is
/// reached wins; the choice is recomputed on every call.
pub fn select_linear_unit(value: f64, system: UnitSystem) -> &'static LinearUnit {
    let thresholds = system.display_thresholds();
    let mut selected = thresholds[0].0;
    for &(unit, from) in thresholds {
        if value >= from * (1.0 - THRESHOLD_TOLERANCE) {
            selected = unit;
        }
    }
    selected
}

/// A length together with the unit it is displayed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayLength {
    pub value: f64,
    pub unit: &'static LinearUnit,
}

impl DisplayLength {
    /// Select the display unit for `value` (in `system`'s base unit) and
    /// convert the value into it.
    pub fn select(value: f64, system: UnitSystem) -> Self {
        let base = system.base_unit();
        let unit = select_linear_unit(value, system);
        DisplayLength {
            value: base.convert_to(unit, value),
            unit,
        }
    }
}
