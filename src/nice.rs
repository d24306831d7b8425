//! Nice-length reduction and label formatting.
//!
//! A scale bar never shows the raw geodetic length under its maximum pixel
//! extent; it shrinks to the largest "nice" value below it, a multiplier from
//! a small palette times a power of ten.

use crate::units::{LinearUnit, select_linear_unit};

/// Multipliers for a bar with a single label.
pub const PLAIN_MULTIPLIERS: &[f64] = &[1.0, 2.0, 5.0, 10.0];

/// Multipliers for segmented bars; each splits into 2 or 4 round parts.
pub const SEGMENTED_MULTIPLIERS: &[f64] = &[1.0, 2.0, 4.0, 5.0, 8.0, 10.0];

/// Exponent of the smallest magnitude considered (a thousandth of a unit).
pub const MIN_MAGNITUDE_EXP: i32 = -3;

/// Relative slack when comparing a residual against the palette.
const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// The multiplier palette for a bar.
pub fn multipliers(segmented: bool) -> &'static [f64] {
    if segmented { SEGMENTED_MULTIPLIERS } else { PLAIN_MULTIPLIERS }
}

/// The smallest value the reducer can return.
pub fn smallest_nice_length(segmented: bool) -> f64 {
    multipliers(segmented)[0] * 10f64.powi(MIN_MAGNITUDE_EXP)
}

/// Exponent of the largest power of ten not above `value` (`value > 0`).
pub(crate) fn magnitude_exp(value: f64) -> i32 {
    let mut exp = value.log10().floor() as i32;
    // log10 can land one off either side of an exact power of ten
    if 10f64.powi(exp) > value {
        exp -= 1;
    } else if 10f64.powi(exp + 1) <= value {
        exp += 1;
    }
    exp
}

/// Split `value` into a palette multiplier and its power of ten, picking the
/// largest multiplier that does not exceed the value's residual.
pub(crate) fn decompose(value: f64, palette: &[f64]) -> (f64, f64) {
    let magnitude = 10f64.powi(magnitude_exp(value));
    let residual = value / magnitude;
    let mut chosen = palette[0];
    for &m in palette {
        if m > residual * (1.0 + RESIDUAL_TOLERANCE) {
            break;
        }
        chosen = m;
    }
    (chosen, magnitude)
}

/// Reduce `max_length` (in `unit`) to the largest nice value not above it.
///
/// Lengths below the smallest palette entry, and non-positive or non-finite
/// input, give back that smallest entry instead of zero.
///
/// If the reduced length would be displayed in a larger unit of the same
/// system (feet shown as miles), the reduction is repeated in that unit so
/// the number printed on the bar is itself nice.
pub fn best_length(max_length: f64, unit: &LinearUnit, segmented: bool) -> f64 {
    let best = reduce(max_length, segmented);

    let Some(system) = unit.system() else {
        return best;
    };
    let display_unit = select_linear_unit(unit.convert_to(system.base_unit(), best), system);
    if display_unit.id() == unit.id() || display_unit.meters_per_unit() <= unit.meters_per_unit() {
        return best;
    }

    let in_display = reduce(unit.convert_to(display_unit, max_length), segmented);
    let renice = display_unit.convert_to(unit, in_display);
    crate::log::trace!(best, renice, unit = %display_unit, "re-reduced in display unit");
    renice
}

fn reduce(max_length: f64, segmented: bool) -> f64 {
    let smallest = smallest_nice_length(segmented);
    if !max_length.is_finite() || max_length < smallest {
        return smallest;
    }
    let (multiplier, magnitude) = decompose(max_length, multipliers(segmented));
    multiplier * magnitude
}

/// Format a distance for a label: two decimals at most, trailing zeros
/// dropped ("10", "2.5", "0.25").
pub fn label_string(distance: f64) -> String {
    let label = format!("{distance:.2}");
    if let Some(whole) = label.strip_suffix(".00") {
        return whole.to_string();
    }
    match label.strip_suffix('0') {
        Some(trimmed) => trimmed.to_string(),
        None => label,
    }
}
