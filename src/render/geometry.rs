//! Drawing pieces shared by several styles.

use glam::{DVec2, dvec2};

use super::context::RenderContext;
use super::path_builder::{Path, PathBuilder};
use super::scene::{Paint, Primitive, Scene, TextAlign};
use super::ScaleFrame;
use crate::layout::Extents;
use crate::nice::label_string;
use crate::types::Color;

/// Baseline of labels drawn under the bar.
pub fn label_baseline(extents: &Extents, ctx: &RenderContext) -> f64 {
    extents.bottom + ctx.text_size
}

/// Filled rounded bar in `color` over its drop shadow.
pub fn bar_and_shadow(scene: &mut Scene, ctx: &RenderContext, extents: &Extents, color: Color) {
    let rect = extents.rect();
    scene.push(Primitive::RoundRect {
        rect: rect.translate(ctx.bar_shadow_offset()),
        radius: ctx.corner_radius,
        paint: Paint::Fill(ctx.shadow_color),
    });
    scene.push(Primitive::RoundRect {
        rect,
        radius: ctx.corner_radius,
        paint: Paint::Fill(color),
    });
}

/// Stroked rounded outline around the whole bar.
pub fn outline(scene: &mut Scene, ctx: &RenderContext, extents: &Extents) {
    scene.push(Primitive::RoundRect {
        rect: extents.rect(),
        radius: ctx.corner_radius,
        paint: Paint::Stroke(ctx.line_stroke()),
    });
}

/// Tick at the left end, the line along the bottom, tick at the right end.
pub fn tick_line_tick(extents: &Extents) -> Path {
    PathBuilder::new(dvec2(extents.left, extents.top))
        .line_to(dvec2(extents.left, extents.bottom))
        .line_to(dvec2(extents.right, extents.bottom))
        .line_to(dvec2(extents.right, extents.top))
        .build()
}

/// Stroke `path` over a copy of itself shifted by the shadow offset.
pub fn path_and_shadow(scene: &mut Scene, ctx: &RenderContext, path: Path) {
    scene.push(Primitive::Path {
        path: path.translate(DVec2::splat(ctx.shadow_offset)),
        stroke: ctx.shadow_stroke().round(),
    });
    scene.push(Primitive::Path {
        path,
        stroke: ctx.line_stroke().round(),
    });
}

/// Single label centered under the bar: "`value unit`".
pub fn centered_label(scene: &mut Scene, frame: &ScaleFrame, ctx: &RenderContext) {
    let extents = &frame.extents;
    let x = extents.left + extents.length() / 2.0;
    scene.text(frame.label(), dvec2(x, label_baseline(extents, ctx)), TextAlign::Center);
}

/// "0" at the left end, the value right-aligned on the right end and the
/// unit suffix running on past it.
pub fn end_labels(scene: &mut Scene, frame: &ScaleFrame, ctx: &RenderContext) {
    let extents = &frame.extents;
    let y = label_baseline(extents, ctx);
    scene.text("0", dvec2(extents.left, y), TextAlign::Left);
    value_and_suffix(scene, frame.value, frame.unit.abbreviation(), dvec2(extents.right, y));
}

/// Value right-aligned on `anchor`, " unit" left-aligned on it.
pub fn value_and_suffix(scene: &mut Scene, value: f64, abbreviation: &str, anchor: DVec2) {
    scene.text(label_string(value), anchor, TextAlign::Right);
    scene.text(format!(" {abbreviation}"), anchor, TextAlign::Left);
}

/// Interior segment boundaries: x position and the distance printed there.
pub fn segment_boundaries(frame: &ScaleFrame) -> impl Iterator<Item = (f64, f64)> + '_ {
    let n = frame.segment_count.max(1);
    let step_px = frame.extents.length() / n as f64;
    let step_value = frame.value / n as f64;
    (1..n).map(move |i| {
        let i = i as f64;
        (frame.extents.left + step_px * i, step_value * i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LinearUnit, UnitSystem};

    fn frame(segment_count: u32) -> ScaleFrame {
        ScaleFrame {
            extents: Extents {
                left: 10.0,
                right: 210.0,
                top: 50.0,
                bottom: 60.0,
            },
            value: 400.0,
            unit: &LinearUnit::METERS,
            unit_system: UnitSystem::Metric,
            segment_count,
        }
    }

    #[test]
    fn boundaries_split_evenly() {
        let f = frame(4);
        let boundaries: Vec<_> = segment_boundaries(&f).collect();
        assert_eq!(boundaries, vec![(60.0, 100.0), (110.0, 200.0), (160.0, 300.0)]);
        assert_eq!(segment_boundaries(&frame(1)).count(), 0);
    }

    #[test]
    fn tick_line_tick_shape() {
        let path = tick_line_tick(&frame(1).extents);
        let points: Vec<_> = path.commands().iter().map(|c| c.point()).collect();
        assert_eq!(
            points,
            vec![dvec2(10.0, 50.0), dvec2(10.0, 60.0), dvec2(210.0, 60.0), dvec2(210.0, 50.0)]
        );
    }
}
