use glam::{DVec2, dvec2};
use scalebar::render::{PathCommand, Primitive, TextAlign};
use scalebar::types::Font;
use scalebar::{
    Alignment, Config, GeoPoint, LinearUnit, MapViewport, MercatorViewport, Placement,
    ProportionalTextMeasure, Rect, Scalebar, Scene, Style, TextMeasure, Typeface, UnitSystem,
};

/// A 1200 × 800 map whose every horizontal span measures `meters` on the ground.
struct FixedViewport {
    meters: f64,
}

impl MapViewport for FixedViewport {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 800.0)
    }

    fn screen_to_geographic(&self, point: DVec2) -> Option<GeoPoint> {
        Some(GeoPoint::new(0.0, point.x))
    }

    fn geodesic_length(&self, _: GeoPoint, _: GeoPoint, unit: &LinearUnit) -> f64 {
        LinearUnit::METERS.convert_to(unit, self.meters)
    }
}

fn measure() -> ProportionalTextMeasure {
    ProportionalTextMeasure::default()
}

fn default_font() -> Font {
    Font {
        typeface: Typeface::default(),
        size_px: 15.0,
    }
}

fn scalebar(style: Style) -> Scalebar {
    let mut config = Config::default();
    config.set_style(style);
    Scalebar::new(config)
}

fn labels(scene: &Scene) -> String {
    scene.label_texts().join("|")
}

#[test]
fn plain_bar_rounds_down_to_ten_kilometers() {
    let bar = scalebar(Style::Bar);
    let result = bar.compute(&FixedViewport { meters: 12_345.0 }, &measure()).unwrap();
    assert_eq!(result.value, 10.0);
    assert_eq!(result.unit.abbreviation(), "km");
    assert_eq!(result.segment_count, 1);
    // 300 px available in a landscape view
    assert!((result.display_length - 300.0 * 10_000.0 / 12_345.0).abs() < 1e-9);

    let scene = bar.draw(&FixedViewport { meters: 12_345.0 }, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"10 km");
}

#[test]
fn alternating_bar_with_four_segments() {
    let bar = scalebar(Style::AlternatingBar);
    let viewport = FixedViewport { meters: 430.0 };
    let result = bar.compute(&viewport, &measure()).unwrap();
    assert_eq!(result.value, 400.0);
    assert_eq!(result.unit.abbreviation(), "m");
    assert_eq!(result.segment_count, 4);

    let scene = bar.draw(&viewport, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"0|400| m|100|200|300");

    let boundaries: Vec<_> = scene
        .texts()
        .filter(|(_, _, align)| *align == TextAlign::Center)
        .map(|(_, anchor, _)| anchor.x)
        .collect();
    let left = 10.0;
    let step = result.display_length / 4.0;
    for (i, x) in boundaries.iter().enumerate() {
        assert!((x - (left + step * (i + 1) as f64)).abs() < 1e-9);
    }
}

#[test]
fn sub_meter_bar_keeps_boundary_labels_exact() {
    let bar = scalebar(Style::AlternatingBar);
    // 0.1 m in four segments would label "0.03", "0.05", "0.08"
    let viewport = FixedViewport { meters: 0.15 };
    let result = bar.compute(&viewport, &measure()).unwrap();
    assert!((result.value - 0.1).abs() < 1e-12);
    assert_eq!(result.segment_count, 2);
    let scene = bar.draw(&viewport, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"0|0.1| m|0.05");

    // half of 0.01 m cannot be printed at all
    let viewport = FixedViewport { meters: 0.012 };
    let result = bar.compute(&viewport, &measure()).unwrap();
    assert_eq!(result.segment_count, 1);
    let scene = bar.draw(&viewport, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"0|0.01| m");
}

#[test]
fn graduated_line_narrow_labels_fall_back_to_fewer_segments() {
    let bar = scalebar(Style::GraduatedLine);
    // text so wide only one segment fits
    struct WideText;
    impl TextMeasure for WideText {
        fn text_width(&self, text: &str, _: &Font) -> f64 {
            text.len() as f64 * 60.0
        }
    }
    let result = bar.compute(&FixedViewport { meters: 430.0 }, &WideText).unwrap();
    assert_eq!(result.segment_count, 1);
    let scene = bar.draw(&FixedViewport { meters: 430.0 }, &WideText).unwrap();
    insta::assert_snapshot!(labels(&scene), @"0|400| m");
}

#[test]
fn dual_unit_line_reads_feet_independently() {
    let bar = scalebar(Style::DualUnitLine);
    let viewport = FixedViewport { meters: 1500.0 };
    let result = bar.compute(&viewport, &measure()).unwrap();
    assert_eq!((result.value, result.unit.abbreviation()), (1.0, "km"));
    assert_eq!(result.segment_count, 1);

    let scene = bar.draw(&viewport, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"1| km|2000| ft");

    let Some(Primitive::Path { path, .. }) = scene.primitives.get(1) else {
        panic!("expected the line path after its shadow");
    };
    let tick_x = match path.commands()[2] {
        PathCommand::MoveTo(p) => p.x,
        other => panic!("unexpected {other:?}"),
    };
    // 2000 ft out of 3280.84 ft, along a 200 px bar starting at x = 10
    let expected = 10.0 + 200.0 * 2000.0 / LinearUnit::METERS.convert_to(&LinearUnit::FEET, 1000.0);
    assert!((tick_x - expected).abs() < 1e-9);
    assert!((expected - (10.0 + 200.0 * 0.6096)).abs() < 1e-6);

    let (_, anchor, align) = scene.texts().nth(2).unwrap();
    assert_eq!(align, TextAlign::Right);
    assert!((anchor.x - tick_x).abs() < 1e-9);
}

#[test]
fn imperial_feet_turn_into_miles() {
    let mut bar = scalebar(Style::Line);
    bar.set_unit_system(UnitSystem::Imperial);
    // about 3.1 mi
    let result = bar.compute(&FixedViewport { meters: 5000.0 }, &measure()).unwrap();
    assert_eq!((result.value, result.unit.abbreviation()), (2.0, "mi"));
    let scene = bar.draw(&FixedViewport { meters: 5000.0 }, &measure()).unwrap();
    insta::assert_snapshot!(labels(&scene), @"2 mi");
}

#[test]
fn unresolvable_viewport_draws_nothing() {
    let viewport = MercatorViewport::without_spatial_reference(Rect::new(0.0, 0.0, 1200.0, 800.0));
    for style in Style::ALL {
        let bar = scalebar(style);
        assert!(bar.compute(&viewport, &measure()).is_none());
        assert!(bar.draw(&viewport, &measure()).is_none());
    }
}

#[test]
fn right_alignment_leaves_room_for_trailing_units() {
    let mut bar = scalebar(Style::AlternatingBar);
    bar.set_alignment(Alignment::Right);
    let viewport = FixedViewport { meters: 430.0 };
    let result = bar.compute(&viewport, &measure()).unwrap();
    let scene = bar.draw(&viewport, &measure()).unwrap();

    let (_, start, _) = scene.texts().next().unwrap();
    let units_width = measure().text_width(" m", &default_font());
    // padding 10 px, line width 3 px
    let right = 1200.0 - 10.0 - 3.0 - units_width;
    assert!((start.x - (right - result.display_length)).abs() < 1e-9);
}

#[test]
fn center_alignment_centers_on_map() {
    let mut bar = scalebar(Style::Bar);
    bar.set_alignment(Alignment::Center);
    let scene = bar.draw(&FixedViewport { meters: 12_345.0 }, &measure()).unwrap();
    let (_, anchor, align) = scene.texts().next().unwrap();
    assert_eq!(align, TextAlign::Center);
    assert!((anchor.x - 600.0).abs() < 1e-9);
}

#[test]
fn bar_sits_above_attribution_and_padding() {
    let mut bar = scalebar(Style::Bar);
    bar.notify_attribution_layout_changed(25.0);
    let scene = bar.draw(&FixedViewport { meters: 12_345.0 }, &measure()).unwrap();
    let Primitive::RoundRect { rect, .. } = &scene.primitives[1] else {
        panic!("expected the bar after its shadow");
    };
    // 800 - 25 attribution - 10 padding - 15 text
    assert_eq!(rect.bottom(), 750.0);
    assert_eq!(rect.top(), 740.0);
}

#[test]
fn standalone_bar_uses_its_own_box() {
    let mut config = Config::default();
    config.set_style(Style::Line);
    let bar = Scalebar::standalone(config, 400.0, 60.0);
    assert_eq!(
        bar.placement(),
        Placement::Standalone {
            width: 400.0,
            height: 60.0
        }
    );
    let result = bar.compute(&FixedViewport { meters: 700.0 }, &measure()).unwrap();
    assert_eq!(result.value, 500.0);
    let max = 400.0 - measure().text_width(" mm", &default_font());
    assert!((result.display_length - max * 500.0 / 700.0).abs() < 1e-9);

    let scene = bar.draw(&FixedViewport { meters: 700.0 }, &measure()).unwrap();
    let Some(Primitive::Path { path, .. }) = scene.primitives.get(1) else {
        panic!("expected the line path");
    };
    assert_eq!(path.commands()[0].point(), dvec2(0.0, 35.0));
    assert_eq!(path.commands()[1].point(), dvec2(0.0, 45.0));
}

#[test]
fn zooming_in_shortens_the_distance() {
    let bar = scalebar(Style::Line);
    let mut viewport = MercatorViewport::new(
        Rect::new(0.0, 0.0, 1200.0, 800.0),
        GeoPoint::new(0.0, 0.0),
        100.0,
    );
    let far = bar.compute(&viewport, &measure()).unwrap();
    viewport.zoom(10.0);
    let near = bar.compute(&viewport, &measure()).unwrap();
    let meters = |r: &scalebar::ScaleResult| r.unit.convert_to(&LinearUnit::METERS, r.value);
    assert!(meters(&near) < meters(&far));
    // 300 px at 100 m/px is about 30 km, reduced to 20 km
    assert_eq!((far.value, far.unit.abbreviation()), (20.0, "km"));
    assert_eq!((near.value, near.unit.abbreviation()), (2.0, "km"));
}

#[test]
fn redraw_flag_coalesces_triggers() {
    let mut bar = Scalebar::default();
    bar.notify_viewpoint_changed();
    bar.notify_viewpoint_changed();
    bar.set_style(Style::Bar);
    assert!(bar.take_redraw_request());
    assert!(!bar.take_redraw_request());

    bar.set_typeface(Typeface::new("serif", scalebar::FontWeight::Normal).unwrap());
    assert!(bar.take_redraw_request());
    assert!(Typeface::new("", scalebar::FontWeight::Bold).is_err());
}

#[test]
fn config_errors_are_diagnostics() {
    use miette::Diagnostic;

    let mut bar = Scalebar::default();
    let err = bar.set_text_size(scalebar::Dp(f64::NAN)).unwrap_err();
    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("scalebar::config::invalid_size")
    );
    assert!(!bar.take_redraw_request());

    let err = "sideways".parse::<Alignment>().unwrap_err();
    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("scalebar::config::invalid_argument")
    );
}
