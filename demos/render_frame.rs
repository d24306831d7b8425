//! Compute and print one scale bar frame over a Web Mercator map.
//!
//! ```text
//! RUST_LOG=scalebar=trace cargo run --example render_frame --features tracing -- GRADUATED_LINE 51.5 12.5 imperial
//! ```
//!
//! Arguments: style, latitude of the map center, meters per pixel, unit system.

use scalebar::render::Primitive;
use scalebar::{
    Config, GeoPoint, MercatorViewport, ProportionalTextMeasure, Rect, Scalebar, Style, UnitSystem,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let style: Style = args.next().as_deref().unwrap_or("ALTERNATING_BAR").parse()?;
    let lat: f64 = parse_number(args.next(), 0.0)?;
    let resolution: f64 = parse_number(args.next(), 25.0)?;
    let unit_system: UnitSystem = args.next().as_deref().unwrap_or("metric").parse()?;

    let mut config = Config::default();
    config.set_style(style);
    config.set_unit_system(unit_system);
    let bar = Scalebar::new(config);

    let viewport = MercatorViewport::new(
        Rect::new(0.0, 0.0, 1280.0, 720.0),
        GeoPoint::new(lat, 0.0),
        resolution,
    );
    let measure = ProportionalTextMeasure::default();

    let Some(result) = bar.compute(&viewport, &measure) else {
        println!("nothing to draw");
        return Ok(());
    };
    println!(
        "{} {} over {:.1} px in {} segment(s)",
        scalebar::label_string(result.value),
        result.unit,
        result.display_length,
        result.segment_count
    );

    if let Some(scene) = bar.draw(&viewport, &measure) {
        for primitive in &scene.primitives {
            match primitive {
                Primitive::Text { text, anchor, align } => {
                    println!("  text {text:?} at ({:.1}, {:.1}) {align:?}", anchor.x, anchor.y)
                }
                other => println!("  {other:?}"),
            }
        }
    }
    Ok(())
}

fn parse_number(arg: Option<String>, default: f64) -> miette::Result<f64> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|e| miette::miette!("expected a number, got {s:?}: {e}")),
        None => Ok(default),
    }
}
