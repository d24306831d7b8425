//! The scale bar widget: configuration, placement and the per-frame pass.
//!
//! A [`Scalebar`] holds no map state. Every call to [`Scalebar::compute`] or
//! [`Scalebar::draw`] measures the viewport afresh, reduces the measured
//! distance to a nice one, picks the unit and segment count, lays the bar out
//! and (for `draw`) hands the result to the configured style.
//!
//! Changes that should cause a redraw raise a flag the host drains with
//! [`Scalebar::take_redraw_request`].

use glam::DVec2;

use crate::config::Config;
use crate::errors::{ConfigError, SkipReason};
use crate::layout::{
    Alignment, Container, Extents, Placement, VerticalSpace, left_position, max_length_in_map_view,
    vertical_position,
};
use crate::log::debug;
use crate::nice::best_length;
use crate::render::{RenderContext, ScaleFrame, Scene, Style, StyleRenderer, defaults};
use crate::segments::{label_probe, segment_count};
use crate::types::{Color, Dp, Typeface};
use crate::units::{DisplayLength, LinearUnit, UnitSystem};
use crate::viewport::{MapViewport, TextMeasure};

/// Outcome of one computation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleResult {
    /// Length of the bar in device pixels.
    pub display_length: f64,
    /// Distance the bar represents, in `unit`.
    pub value: f64,
    pub unit: &'static LinearUnit,
    /// At least 1; greater only for segmented styles.
    pub segment_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Scalebar {
    config: Config,
    placement: Placement,
    attribution_height: f64,
    redraw_requested: bool,
}

impl Scalebar {
    pub fn new(config: Config) -> Self {
        Scalebar {
            config,
            ..Default::default()
        }
    }

    /// A scale bar in its own box of `width` × `height` device pixels rather
    /// than overlaid on the map.
    pub fn standalone(config: Config, width: f64, height: f64) -> Self {
        Scalebar {
            config,
            placement: Placement::Standalone { width, height },
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    // ------------------------------------------------------------------------
    // Redraw signal
    // ------------------------------------------------------------------------

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Whether a redraw is pending, clearing the flag. Any number of triggers
    /// since the last call coalesce into one.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// The map was panned, zoomed or rotated.
    pub fn notify_viewpoint_changed(&mut self) {
        self.request_redraw();
    }

    /// The attribution text under the map changed height. Negative or
    /// non-finite heights are ignored.
    pub fn notify_attribution_layout_changed(&mut self, height: f64) {
        if height.is_finite() && height >= 0.0 {
            self.attribution_height = height;
            self.request_redraw();
        }
    }

    // ------------------------------------------------------------------------
    // Setters
    // ------------------------------------------------------------------------

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.request_redraw();
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
        self.request_redraw();
    }

    pub fn set_style(&mut self, style: Style) {
        self.config.set_style(style);
        self.request_redraw();
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.set_alignment(alignment);
        self.request_redraw();
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.config.set_unit_system(unit_system);
        self.request_redraw();
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.config.set_fill_color(color);
        self.request_redraw();
    }

    pub fn set_alternate_fill_color(&mut self, color: Color) {
        self.config.set_alternate_fill_color(color);
        self.request_redraw();
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.config.set_line_color(color);
        self.request_redraw();
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.config.set_shadow_color(color);
        self.request_redraw();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.config.set_text_color(color);
        self.request_redraw();
    }

    pub fn set_text_shadow_color(&mut self, color: Color) {
        self.config.set_text_shadow_color(color);
        self.request_redraw();
    }

    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.config.set_typeface(typeface);
        self.request_redraw();
    }

    pub fn set_text_size(&mut self, size: Dp) -> Result<(), ConfigError> {
        self.config.set_text_size(size)?;
        self.request_redraw();
        Ok(())
    }

    pub fn set_bar_height(&mut self, height: Dp) -> Result<(), ConfigError> {
        self.config.set_bar_height(height)?;
        self.request_redraw();
        Ok(())
    }

    pub fn set_padding(&mut self, x: Dp, y: Dp) -> Result<(), ConfigError> {
        self.config.set_padding(x, y)?;
        self.request_redraw();
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Frame pass
    // ------------------------------------------------------------------------

    /// Measure the viewport and work out what the bar should show.
    ///
    /// Returns `None` when the frame cannot be computed, for instance before
    /// the map has a spatial reference.
    pub fn compute(&self, viewport: &dyn MapViewport, measure: &dyn TextMeasure) -> Option<ScaleResult> {
        let (frame, display_length) = self.frame(viewport, measure, &self.context(viewport)).ok()?;
        Some(ScaleResult {
            display_length,
            value: frame.value,
            unit: frame.unit,
            segment_count: frame.segment_count,
        })
    }

    /// Compute the frame and produce the drawable scene for the configured
    /// style, or `None` if nothing should be drawn this frame.
    pub fn draw(&self, viewport: &dyn MapViewport, measure: &dyn TextMeasure) -> Option<Scene> {
        let ctx = self.context(viewport);
        let (frame, _) = self.frame(viewport, measure, &ctx).ok()?;
        Some(self.config.style().renderer().render(&frame, &ctx))
    }

    fn context(&self, viewport: &dyn MapViewport) -> RenderContext {
        RenderContext::new(&self.config, viewport.density())
    }

    fn frame(
        &self,
        viewport: &dyn MapViewport,
        measure: &dyn TextMeasure,
        ctx: &RenderContext,
    ) -> Result<(ScaleFrame, f64), SkipReason> {
        self.try_frame(viewport, measure, ctx).inspect_err(|_reason| {
            debug!(reason = %_reason, "skipping scale bar frame");
        })
    }

    fn try_frame(
        &self,
        viewport: &dyn MapViewport,
        measure: &dyn TextMeasure,
        ctx: &RenderContext,
    ) -> Result<(ScaleFrame, f64), SkipReason> {
        let bounds = viewport.bounds();
        let font = ctx.font();

        let (max_px, container, space) = match self.placement {
            Placement::InMapView => (
                max_length_in_map_view(bounds.width(), bounds.height()),
                Container {
                    left: bounds.left(),
                    right: bounds.right(),
                    padding: ctx.x_padding,
                },
                VerticalSpace {
                    bottom_edge: bounds.bottom(),
                    reserved_bottom: self.attribution_height + viewport.inset_bottom() + ctx.y_padding,
                    text_size: ctx.text_size,
                    bar_height: ctx.bar_height,
                },
            ),
            Placement::Standalone { width, height } => (
                width - measure.text_width(defaults::STANDALONE_UNITS_PROBE, font),
                Container {
                    left: 0.0,
                    right: width,
                    padding: 0.0,
                },
                VerticalSpace {
                    bottom_edge: height,
                    reserved_bottom: 0.0,
                    text_size: ctx.text_size,
                    bar_height: ctx.bar_height,
                },
            ),
        };
        positive("maximum bar length", max_px)?;

        // measure a horizontal span of the maximum length through the map center
        let center = bounds.center();
        let half = DVec2::new(max_px / 2.0, 0.0);
        let start = viewport
            .screen_to_geographic(center - half)
            .ok_or(SkipReason::UnresolvableGeometry)?;
        let end = viewport
            .screen_to_geographic(center + half)
            .ok_or(SkipReason::UnresolvableGeometry)?;

        let system = self.config.unit_system();
        let base = system.base_unit();
        let max_geodetic = viewport.geodesic_length(start, end, base);
        positive("geodetic length", max_geodetic)?;

        let renderer = self.config.style().renderer();
        let nice = best_length(max_geodetic, base, renderer.is_segmented());
        let display_px = max_px * nice / max_geodetic;
        let shown = DisplayLength::select(nice, system);

        let segments = if renderer.is_segmented() {
            let label_width = measure.text_width(&label_probe(shown.value), font);
            segment_count(shown.value, display_px, label_width, ctx.label_pad)
        } else {
            1
        };

        let extra_units_width = if renderer.trailing_units() {
            measure.text_width(&format!(" {}", shown.unit.abbreviation()), font)
        } else {
            0.0
        };
        let left = left_position(
            self.config.alignment(),
            display_px,
            container,
            ctx.line_width,
            extra_units_width,
        );
        let (top, bottom) = vertical_position(space);

        debug!(
            max_px,
            max_geodetic,
            nice,
            display_px,
            value = shown.value,
            unit = %shown.unit,
            segments,
            "scale bar frame"
        );

        let frame = ScaleFrame {
            extents: Extents {
                left,
                right: left + display_px,
                top,
                bottom,
            },
            value: shown.value,
            unit: shown.unit,
            unit_system: system,
            segment_count: segments,
        };
        Ok((frame, display_px))
    }
}

fn positive(what: &'static str, value: f64) -> Result<(), SkipReason> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SkipReason::DegenerateInput { what, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use crate::viewport::{GeoPoint, ProportionalTextMeasure};

    /// Reports a fixed ground distance for any pair of points.
    struct FixedViewport {
        bounds: Rect,
        meters: f64,
    }

    impl MapViewport for FixedViewport {
        fn bounds(&self) -> Rect {
            self.bounds
        }

        fn screen_to_geographic(&self, point: DVec2) -> Option<GeoPoint> {
            Some(GeoPoint::new(0.0, point.x))
        }

        fn geodesic_length(&self, _: GeoPoint, _: GeoPoint, unit: &LinearUnit) -> f64 {
            LinearUnit::METERS.convert_to(unit, self.meters)
        }
    }

    fn viewport(meters: f64) -> FixedViewport {
        FixedViewport {
            bounds: Rect::new(0.0, 0.0, 1200.0, 800.0),
            meters,
        }
    }

    #[test]
    fn setters_raise_redraw_once() {
        let mut bar = Scalebar::default();
        assert!(!bar.take_redraw_request());
        bar.set_style(Style::Line);
        bar.set_line_color(Color::BLACK);
        bar.notify_viewpoint_changed();
        assert!(bar.take_redraw_request());
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn rejected_setter_keeps_state() {
        let mut bar = Scalebar::default();
        assert!(bar.set_bar_height(Dp(0.0)).is_err());
        assert!(!bar.take_redraw_request());
        assert_eq!(bar.config(), &Config::default());
    }

    #[test]
    fn attribution_height_moves_bar_up() {
        let mut bar = Scalebar::default();
        let measure = ProportionalTextMeasure::default();
        let before = bar.draw(&viewport(12345.0), &measure).unwrap();
        bar.notify_attribution_layout_changed(40.0);
        assert!(bar.take_redraw_request());
        let after = bar.draw(&viewport(12345.0), &measure).unwrap();
        let baseline = |scene: &Scene| scene.texts().next().unwrap().1.y;
        assert_eq!(baseline(&before) - baseline(&after), 40.0);

        bar.notify_attribution_layout_changed(f64::NAN);
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn pixel_length_is_proportional() {
        let bar = Scalebar::new(Config::default());
        let result = bar
            .compute(&viewport(430.0), &ProportionalTextMeasure::default())
            .unwrap();
        // 300 px max in a landscape view
        assert!((result.display_length - 300.0 * 400.0 / 430.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_distance_skips_frame() {
        let bar = Scalebar::default();
        let measure = ProportionalTextMeasure::default();
        assert_eq!(bar.compute(&viewport(0.0), &measure), None);
        assert_eq!(bar.compute(&viewport(f64::NAN), &measure), None);
        let tiny = FixedViewport {
            bounds: Rect::new(0.0, 0.0, 2.0, 2.0),
            meters: 100.0,
        };
        assert_eq!(bar.compute(&tiny, &measure), None);
    }
}
