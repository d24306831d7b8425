//! The five scale bar styles.

use glam::dvec2;

use super::context::RenderContext;
use super::geometry::{
    bar_and_shadow, centered_label, end_labels, label_baseline, outline, path_and_shadow,
    segment_boundaries, tick_line_tick, value_and_suffix,
};
use super::path_builder::PathBuilder;
use super::scene::{Paint, Primitive, Scene, TextAlign};
use super::{ScaleFrame, StyleRenderer};
use crate::nice::{best_length, label_string};
use crate::types::Rect;
use crate::units::DisplayLength;

/// A solid bar with the length centered underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BarRenderer;

impl StyleRenderer for BarRenderer {
    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene {
        let mut scene = Scene::new(ctx.text_paint.clone());
        bar_and_shadow(&mut scene, ctx, &frame.extents, ctx.fill_color);
        outline(&mut scene, ctx, &frame.extents);
        centered_label(&mut scene, frame, ctx);
        scene
    }
}

/// A bar split into segments of alternating color, labelled at every
/// boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlternatingBarRenderer;

impl StyleRenderer for AlternatingBarRenderer {
    fn is_segmented(&self) -> bool {
        true
    }

    fn trailing_units(&self) -> bool {
        true
    }

    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene {
        let mut scene = Scene::new(ctx.text_paint.clone());
        let extents = &frame.extents;
        bar_and_shadow(&mut scene, ctx, extents, ctx.fill_color);

        let n = frame.segment_count.max(1);
        let segment_px = extents.length() / n as f64;
        for i in (1..n).step_by(2) {
            let x = extents.left + segment_px * i as f64;
            scene.push(Primitive::Rect {
                rect: Rect::new(x, extents.top, x + segment_px, extents.bottom),
                paint: Paint::Fill(ctx.alternate_fill_color),
            });
        }

        outline(&mut scene, ctx, extents);
        end_labels(&mut scene, frame, ctx);

        let y = label_baseline(extents, ctx);
        for (x, distance) in segment_boundaries(frame) {
            scene.push(Primitive::Line {
                from: dvec2(x, extents.top),
                to: dvec2(x, extents.bottom),
                stroke: ctx.line_stroke(),
            });
            scene.text(label_string(distance), dvec2(x, y), TextAlign::Center);
        }
        scene
    }
}

/// A line with a tick at each end and the length centered underneath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineRenderer;

impl StyleRenderer for LineRenderer {
    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene {
        let mut scene = Scene::new(ctx.text_paint.clone());
        path_and_shadow(&mut scene, ctx, tick_line_tick(&frame.extents));
        centered_label(&mut scene, frame, ctx);
        scene
    }
}

/// A line with shorter ticks at every segment boundary, each labelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraduatedLineRenderer;

impl StyleRenderer for GraduatedLineRenderer {
    fn is_segmented(&self) -> bool {
        true
    }

    fn trailing_units(&self) -> bool {
        true
    }

    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene {
        let mut scene = Scene::new(ctx.text_paint.clone());
        let extents = &frame.extents;
        // interior ticks are 3/4 the height of the end ticks
        let tick_top = extents.top + (extents.bottom - extents.top) / 4.0;
        let y = label_baseline(extents, ctx);
        let shadow = dvec2(ctx.shadow_offset, ctx.shadow_offset);
        for (x, distance) in segment_boundaries(frame) {
            let (from, to) = (dvec2(x, tick_top), dvec2(x, extents.bottom));
            scene.push(Primitive::Line {
                from: from + shadow,
                to: to + shadow,
                stroke: ctx.shadow_stroke().round(),
            });
            scene.push(Primitive::Line {
                from,
                to,
                stroke: ctx.line_stroke().round(),
            });
            scene.text(label_string(distance), dvec2(x, y), TextAlign::Center);
        }

        path_and_shadow(&mut scene, ctx, tick_line_tick(extents));
        end_labels(&mut scene, frame, ctx);
        scene
    }
}

/// A line read in both unit systems: the primary length above the right
/// end, a nice length in the other system marked by a tick below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DualUnitLineRenderer;

impl StyleRenderer for DualUnitLineRenderer {
    fn trailing_units(&self) -> bool {
        true
    }

    fn render(&self, frame: &ScaleFrame, ctx: &RenderContext) -> Scene {
        let mut scene = Scene::new(ctx.text_paint.clone());
        let extents = &frame.extents;

        let secondary_system = frame.unit_system.other();
        let secondary_base = secondary_system.base_unit();
        let full = frame.unit.convert_to(secondary_base, frame.value);
        let nice = best_length(full, secondary_base, false);
        let tick_x = if full > 0.0 {
            extents.left + extents.length() * nice / full
        } else {
            extents.left
        };
        let secondary = DisplayLength::select(nice, secondary_system);
        crate::log::trace!(full, nice, tick_x, unit = %secondary.unit, "secondary reading");

        let mid = (extents.top + extents.bottom) / 2.0;
        let path = PathBuilder::new(dvec2(extents.left, extents.top))
            .line_to(dvec2(extents.left, extents.bottom))
            .move_to(dvec2(tick_x, mid))
            .line_to(dvec2(tick_x, extents.bottom))
            .move_to(dvec2(extents.left, mid))
            .line_to(dvec2(extents.right, mid))
            .line_to(dvec2(extents.right, extents.top))
            .build();
        path_and_shadow(&mut scene, ctx, path);

        value_and_suffix(
            &mut scene,
            frame.value,
            frame.unit.abbreviation(),
            dvec2(extents.right, extents.top),
        );
        value_and_suffix(
            &mut scene,
            secondary.value,
            secondary.unit.abbreviation(),
            dvec2(tick_x, label_baseline(extents, ctx)),
        );
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::Extents;
    use crate::render::path_builder::PathCommand;
    use crate::types::Density;
    use crate::units::{LinearUnit, UnitSystem};

    fn ctx() -> RenderContext {
        RenderContext::new(&Config::default(), Density::IDENTITY)
    }

    fn frame(value: f64, unit: &'static LinearUnit, segment_count: u32) -> ScaleFrame {
        ScaleFrame {
            extents: Extents {
                left: 10.0,
                right: 210.0,
                top: 50.0,
                bottom: 60.0,
            },
            value,
            unit,
            unit_system: UnitSystem::Metric,
            segment_count,
        }
    }

    #[test]
    fn bar_paints_shadow_fill_outline_label() {
        let scene = BarRenderer.render(&frame(10.0, &LinearUnit::KILOMETERS, 1), &ctx());
        assert_eq!(scene.primitives.len(), 4);
        let Primitive::RoundRect { rect, paint, .. } = &scene.primitives[0] else {
            panic!("expected shadow first");
        };
        assert_eq!(*rect, Rect::new(13.0, 53.0, 213.0, 63.0));
        assert_eq!(*paint, Paint::Fill(ctx().shadow_color));
        let (text, anchor, align) = scene.texts().next().unwrap();
        assert_eq!(text, "10 km");
        assert_eq!(anchor, dvec2(110.0, 75.0));
        assert_eq!(align, TextAlign::Center);
    }

    #[test]
    fn alternating_bar_colors_odd_segments() {
        let ctx = ctx();
        let scene = AlternatingBarRenderer.render(&frame(400.0, &LinearUnit::METERS, 4), &ctx);
        let segments: Vec<_> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect { rect, paint } => Some((rect.left(), *paint)),
                _ => None,
            })
            .collect();
        assert_eq!(
            segments,
            vec![
                (60.0, Paint::Fill(ctx.alternate_fill_color)),
                (160.0, Paint::Fill(ctx.alternate_fill_color)),
            ]
        );
        let dividers = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { .. }))
            .count();
        assert_eq!(dividers, 3);
        assert_eq!(scene.label_texts(), vec!["0", "400", " m", "100", "200", "300"]);
    }

    #[test]
    fn single_segment_alternating_bar_has_no_dividers() {
        let scene = AlternatingBarRenderer.render(&frame(5.0, &LinearUnit::KILOMETERS, 1), &ctx());
        assert!(!scene.primitives.iter().any(|p| matches!(p, Primitive::Line { .. } | Primitive::Rect { .. })));
        assert_eq!(scene.label_texts(), vec!["0", "5", " km"]);
    }

    #[test]
    fn line_shadow_is_offset_by_two_pixels() {
        let scene = LineRenderer.render(&frame(200.0, &LinearUnit::METERS, 1), &ctx());
        let paths: Vec<_> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Path { path, .. } => Some(path.commands()[0].point()),
                _ => None,
            })
            .collect();
        assert_eq!(paths, vec![dvec2(12.0, 52.0), dvec2(10.0, 50.0)]);
        assert_eq!(scene.label_texts(), vec!["200 m"]);
    }

    #[test]
    fn graduated_ticks_are_three_quarters_high() {
        let scene = GraduatedLineRenderer.render(&frame(2.0, &LinearUnit::KILOMETERS, 2), &ctx());
        let Primitive::Line { from, to, .. } = &scene.primitives[1] else {
            panic!("expected interior tick");
        };
        assert_eq!((*from, *to), (dvec2(110.0, 52.5), dvec2(110.0, 60.0)));
        assert_eq!(scene.label_texts(), vec!["1", "0", "2", " km"]);
    }

    #[test]
    fn dual_unit_secondary_tick() {
        let scene = DualUnitLineRenderer.render(&frame(1.0, &LinearUnit::KILOMETERS, 1), &ctx());
        let Some(Primitive::Path { path, .. }) = scene.primitives.get(1) else {
            panic!("expected line path");
        };
        assert_eq!(path.subpath_count(), 3);
        let PathCommand::MoveTo(tick_top) = path.commands()[2] else {
            panic!("expected secondary tick subpath");
        };
        // 2000 ft of 3280.84 ft
        assert!((tick_top.x - (10.0 + 200.0 * 0.6096)).abs() < 1e-6);
        assert_eq!(tick_top.y, 55.0);
        assert_eq!(scene.label_texts(), vec!["1", " km", "2000", " ft"]);
    }
}
