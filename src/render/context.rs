//! Per-frame render context.
//!
//! Everything a renderer needs from the configuration, resolved to device
//! pixels for the current density.

use glam::DVec2;

use super::defaults;
use super::scene::{Stroke, TextPaint};
use crate::config::Config;
use crate::types::{Color, Density, Font};

#[derive(Clone, Debug, PartialEq)]
pub struct RenderContext {
    pub line_width: f64,
    pub corner_radius: f64,
    pub bar_height: f64,
    pub text_size: f64,
    /// Gap kept between adjacent segment labels.
    pub label_pad: f64,
    pub x_padding: f64,
    pub y_padding: f64,
    pub shadow_offset: f64,
    pub fill_color: Color,
    pub alternate_fill_color: Color,
    pub line_color: Color,
    pub shadow_color: Color,
    pub text_paint: TextPaint,
}

impl RenderContext {
    pub fn new(config: &Config, density: Density) -> Self {
        let font = Font {
            typeface: config.typeface().clone(),
            size_px: density.px(config.text_size()),
        };
        let shadow_offset = defaults::SHADOW_OFFSET_PX;
        RenderContext {
            line_width: density.px(config.line_width()),
            corner_radius: density.px(config.corner_radius()),
            bar_height: density.px(config.bar_height()),
            text_size: font.size_px,
            label_pad: density.px(defaults::LABEL_X_PAD),
            x_padding: density.px(config.x_padding()),
            y_padding: density.px(config.y_padding()),
            shadow_offset,
            fill_color: config.fill_color(),
            alternate_fill_color: config.alternate_fill_color(),
            line_color: config.line_color(),
            shadow_color: config.shadow_color(),
            text_paint: TextPaint {
                color: config.text_color(),
                font,
                shadow_color: config.text_shadow_color(),
                shadow_offset: DVec2::splat(shadow_offset),
                shadow_blur: defaults::TEXT_SHADOW_BLUR_PX,
            },
        }
    }

    pub fn font(&self) -> &Font {
        &self.text_paint.font
    }

    /// Stroke for outlines, dividers and line styles.
    pub fn line_stroke(&self) -> Stroke {
        Stroke::new(self.line_color, self.line_width)
    }

    pub fn shadow_stroke(&self) -> Stroke {
        Stroke::new(self.shadow_color, self.line_width)
    }

    /// Offset of the bar shadow: the shadow offset plus half the outline,
    /// rounded down to whole pixels.
    pub fn bar_shadow_offset(&self) -> DVec2 {
        DVec2::splat(self.shadow_offset + (self.line_width / 2.0).floor())
    }
}
