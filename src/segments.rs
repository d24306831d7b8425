//! Segment count selection for graduated and alternating bars.

use crate::nice::{SEGMENTED_MULTIPLIERS, decompose, label_string};

/// Hard cap on the number of segments.
pub const MAX_SEGMENTS: u32 = 4;

/// Clearance per segment, in label widths. The last label is right-justified
/// rather than centered on its boundary, so it needs more than one width.
pub const LABEL_WIDTH_FACTOR: f64 = 1.5;

/// Labels shorter than this are measured as [`LABEL_WIDTH_PROBE`] instead,
/// because interior boundaries can carry decimals the full length lacks.
const MIN_PROBE_CHARS: usize = 3;

/// Stand-in text used to size short labels.
pub const LABEL_WIDTH_PROBE: &str = "9.9";

/// Allowed segment counts for a displayed length, ascending.
///
/// Derived from the length's palette multiplier so every boundary lands on a
/// round value.
pub fn segment_options(length: f64) -> &'static [u32] {
    if !length.is_finite() || length <= 0.0 {
        return &[1];
    }
    let (multiplier, _) = decompose(length, SEGMENTED_MULTIPLIERS);
    if multiplier == 5.0 { &[1, 2] } else { &[1, 2, 4] }
}

/// Whether `value` survives label formatting unchanged.
fn prints_exactly(value: f64) -> bool {
    label_string(value)
        .parse::<f64>()
        .is_ok_and(|printed| (printed - value).abs() <= value.abs() * 1e-9)
}

/// The largest allowed option for `length` not above `max_segments` whose
/// per-segment distance prints exactly. Never returns less than 1.
pub fn optimal_segment_count(length: f64, max_segments: u32) -> u32 {
    let mut count = 1;
    for &option in segment_options(length) {
        if option > max_segments {
            break;
        }
        // below 1 the magnitude can leave too few decimals for the boundaries
        if option == 1 || prints_exactly(length / option as f64) {
            count = option;
        }
    }
    count
}

/// The text whose width sizes a segment for a bar showing `length`.
pub fn label_probe(length: f64) -> String {
    let label = label_string(length);
    if label.chars().count() < MIN_PROBE_CHARS {
        LABEL_WIDTH_PROBE.to_string()
    } else {
        label
    }
}

/// Pick the segment count for a bar `display_length_px` long showing
/// `length`, given the measured width of one label and the padding kept
/// between labels.
pub fn segment_count(length: f64, display_length_px: f64, label_width_px: f64, label_pad_px: f64) -> u32 {
    let min_segment_width = label_width_px * LABEL_WIDTH_FACTOR + label_pad_px;
    let fit = if min_segment_width > 0.0 {
        display_length_px / min_segment_width
    } else {
        f64::INFINITY
    };
    let max_segments = if fit.is_nan() || fit < 1.0 {
        0
    } else {
        fit.min(MAX_SEGMENTS as f64) as u32
    };
    optimal_segment_count(length, max_segments)
}
