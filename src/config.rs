//! Visual parameters of the scale bar.
//!
//! [`Config`] holds every user-settable value with its default. Sizes are
//! kept in [`Dp`] and converted to device pixels only when a frame is drawn.
//! The line width and corner radius are not set directly; they follow the
//! bar height.

use crate::errors::ConfigError;
use crate::layout::Alignment;
use crate::render::{Style, defaults};
use crate::types::{Color, Dp, Typeface};
use crate::units::UnitSystem;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    style: Style,
    alignment: Alignment,
    unit_system: UnitSystem,
    fill_color: Color,
    alternate_fill_color: Color,
    line_color: Color,
    shadow_color: Color,
    text_color: Color,
    text_shadow_color: Color,
    typeface: Typeface,
    text_size: Dp,
    bar_height: Dp,
    line_width: Dp,
    corner_radius: Dp,
    x_padding: Dp,
    y_padding: Dp,
}

impl Default for Config {
    fn default() -> Self {
        let bar_height = defaults::BAR_HEIGHT;
        Config {
            style: defaults::STYLE,
            alignment: defaults::ALIGNMENT,
            unit_system: defaults::UNIT_SYSTEM,
            fill_color: defaults::FILL_COLOR,
            alternate_fill_color: defaults::ALTERNATE_FILL_COLOR,
            line_color: defaults::LINE_COLOR,
            shadow_color: defaults::SHADOW_COLOR,
            text_color: defaults::TEXT_COLOR,
            text_shadow_color: defaults::TEXT_SHADOW_COLOR,
            typeface: Typeface::default(),
            text_size: defaults::TEXT_SIZE,
            bar_height,
            line_width: derived_line_width(bar_height),
            corner_radius: derived_corner_radius(bar_height),
            x_padding: defaults::X_PADDING,
            y_padding: defaults::Y_PADDING,
        }
    }
}

fn derived_line_width(bar_height: Dp) -> Dp {
    (bar_height * defaults::LINE_WIDTH_RATIO).max(defaults::MIN_DERIVED_SIZE)
}

fn derived_corner_radius(bar_height: Dp) -> Dp {
    (bar_height * defaults::CORNER_RADIUS_RATIO).max(defaults::MIN_DERIVED_SIZE)
}

fn positive_size(name: &'static str, value: Dp) -> Result<Dp, ConfigError> {
    Dp::try_positive(value.raw()).map_err(|source| ConfigError::InvalidSize { name, source })
}

impl Config {
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn alternate_fill_color(&self) -> Color {
        self.alternate_fill_color
    }

    pub fn line_color(&self) -> Color {
        self.line_color
    }

    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn text_shadow_color(&self) -> Color {
        self.text_shadow_color
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    pub fn text_size(&self) -> Dp {
        self.text_size
    }

    pub fn bar_height(&self) -> Dp {
        self.bar_height
    }

    /// A quarter of the bar height, at least 1 dp.
    pub fn line_width(&self) -> Dp {
        self.line_width
    }

    /// A fifth of the bar height, at least 1 dp.
    pub fn corner_radius(&self) -> Dp {
        self.corner_radius
    }

    pub fn x_padding(&self) -> Dp {
        self.x_padding
    }

    pub fn y_padding(&self) -> Dp {
        self.y_padding
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = unit_system;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_alternate_fill_color(&mut self, color: Color) {
        self.alternate_fill_color = color;
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.line_color = color;
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.shadow_color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_text_shadow_color(&mut self, color: Color) {
        self.text_shadow_color = color;
    }

    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.typeface = typeface;
    }

    pub fn set_text_size(&mut self, size: Dp) -> Result<(), ConfigError> {
        self.text_size = positive_size("text size", size)?;
        Ok(())
    }

    /// Also rederives the line width and corner radius.
    pub fn set_bar_height(&mut self, height: Dp) -> Result<(), ConfigError> {
        let height = positive_size("bar height", height)?;
        self.bar_height = height;
        self.line_width = derived_line_width(height);
        self.corner_radius = derived_corner_radius(height);
        Ok(())
    }

    pub fn set_padding(&mut self, x: Dp, y: Dp) -> Result<(), ConfigError> {
        // padding may be zero
        let check = |name, value: Dp| {
            if value.raw() == 0.0 {
                Ok(value)
            } else {
                positive_size(name, value)
            }
        };
        let (x, y) = (check("x padding", x)?, check("y padding", y)?);
        self.x_padding = x;
        self.y_padding = y;
        Ok(())
    }

    /// Build a config from string attributes such as a layout file would
    /// carry (`"scalebar.style" => "LINE"`).
    ///
    /// Unknown keys are ignored. A malformed value keeps its default and is
    /// reported with `warn!`.
    pub fn from_attributes<'a, I>(attributes: I) -> Config
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Config::default();
        for (key, value) in attributes {
            if let Err(_err) = config.apply_attribute(key, value) {
                crate::log::warn!(key, value, error = %_err, "ignoring scale bar attribute");
            }
        }
        config
    }

    fn apply_attribute(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let Some(name) = key.strip_prefix(ATTRIBUTE_PREFIX) else {
            return Ok(());
        };
        match name {
            "style" => self.style = value.parse()?,
            "alignment" => self.alignment = value.parse()?,
            "unitSystem" => self.unit_system = value.parse()?,
            "fillColor" => self.fill_color = value.parse()?,
            "alternateFillColor" => self.alternate_fill_color = value.parse()?,
            "lineColor" => self.line_color = value.parse()?,
            "shadowColor" => self.shadow_color = value.parse()?,
            "textColor" => self.text_color = value.parse()?,
            "textShadowColor" => self.text_shadow_color = value.parse()?,
            "typeface" => self.typeface = Typeface::new(value, self.typeface.weight())?,
            "textSize" => self.set_text_size(parse_dp("text size", value)?)?,
            "barHeight" => self.set_bar_height(parse_dp("bar height", value)?)?,
            _ => {}
        }
        Ok(())
    }
}

const ATTRIBUTE_PREFIX: &str = "scalebar.";

/// Accepts `12`, `12.5` and `12dp`.
fn parse_dp(name: &'static str, value: &str) -> Result<Dp, ConfigError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("dp").unwrap_or(trimmed);
    number
        .trim()
        .parse::<f64>()
        .map(Dp)
        .map_err(|_| ConfigError::invalid(name, format!("expected a size in dp, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FontWeight, NumericError};

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.style(), Style::AlternatingBar);
        assert_eq!(config.alignment(), Alignment::Left);
        assert_eq!(config.unit_system(), UnitSystem::Metric);
        assert_eq!(config.fill_color().to_string(), "#80CCCCCC");
        assert_eq!(config.shadow_color().to_string(), "#80000000");
        assert_eq!(config.text_size(), Dp(15.0));
        assert_eq!(config.line_width(), Dp(2.5));
        assert_eq!(config.corner_radius(), Dp(2.0));
        assert_eq!(config.typeface().weight(), FontWeight::Bold);
    }

    #[test]
    fn bar_height_drives_derived_sizes() {
        let mut config = Config::default();
        config.set_bar_height(Dp(20.0)).unwrap();
        assert_eq!(config.line_width(), Dp(5.0));
        assert_eq!(config.corner_radius(), Dp(4.0));

        config.set_bar_height(Dp(2.0)).unwrap();
        assert_eq!(config.line_width(), Dp(1.0));
        assert_eq!(config.corner_radius(), Dp(1.0));
    }

    #[test]
    fn invalid_sizes_leave_config_untouched() {
        let mut config = Config::default();
        let err = config.set_text_size(Dp(-3.0)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSize {
                name: "text size",
                source: NumericError::Negative
            }
        );
        assert!(config.set_bar_height(Dp(f64::NAN)).is_err());
        assert!(config.set_padding(Dp(0.0), Dp(f64::INFINITY)).is_err());
        assert_eq!(config, Config::default());

        config.set_padding(Dp(0.0), Dp(4.0)).unwrap();
        assert_eq!(config.x_padding(), Dp(0.0));
    }

    #[test]
    fn attributes_override_defaults() {
        let config = Config::from_attributes([
            ("scalebar.style", "graduated_line"),
            ("scalebar.alignment", "RIGHT"),
            ("scalebar.unitSystem", "imperial"),
            ("scalebar.lineColor", "#FF0000"),
            ("scalebar.barHeight", "12dp"),
            ("layout_width", "match_parent"),
        ]);
        assert_eq!(config.style(), Style::GraduatedLine);
        assert_eq!(config.alignment(), Alignment::Right);
        assert_eq!(config.unit_system(), UnitSystem::Imperial);
        assert_eq!(config.line_color(), Color::from_argb(0xFFFF_0000));
        assert_eq!(config.bar_height(), Dp(12.0));
        assert_eq!(config.line_width(), Dp(3.0));
    }

    #[test]
    fn malformed_attributes_fall_back() {
        let config = Config::from_attributes([
            ("scalebar.style", "zigzag"),
            ("scalebar.textSize", "-1"),
            ("scalebar.fillColor", "grey"),
            ("scalebar.typeface", "  "),
        ]);
        assert_eq!(config, Config::default());
    }
}
