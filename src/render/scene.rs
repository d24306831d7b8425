//! The drawable description a style renderer produces.
//!
//! A [`Scene`] is an ordered list of primitives in device pixels, painted
//! back to front. Turning it into pixels is the host's job.

use glam::DVec2;

use super::path_builder::Path;
use crate::types::{Color, Font, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Stroke settings for outlines, lines and paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Stroke {
            color,
            width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }

    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self.join = LineJoin::Round;
        self
    }
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke(Stroke),
}

/// Horizontal anchoring of a text run on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Paint shared by every label in a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    pub font: Font,
    pub shadow_color: Color,
    pub shadow_offset: DVec2,
    pub shadow_blur: f64,
}

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    RoundRect { rect: Rect, radius: f64, paint: Paint },
    Rect { rect: Rect, paint: Paint },
    Line { from: DVec2, to: DVec2, stroke: Stroke },
    Path { path: Path, stroke: Stroke },
    /// `anchor` is on the text baseline.
    Text { text: String, anchor: DVec2, align: TextAlign },
}

/// Everything needed to draw one frame of the scale bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub text_paint: TextPaint,
}

impl Scene {
    pub fn new(text_paint: TextPaint) -> Self {
        Scene {
            primitives: Vec::new(),
            text_paint,
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub(crate) fn text(&mut self, text: impl Into<String>, anchor: DVec2, align: TextAlign) {
        self.push(Primitive::Text {
            text: text.into(),
            anchor,
            align,
        });
    }

    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, DVec2, TextAlign)> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, anchor, align } => Some((text.as_str(), *anchor, *align)),
            _ => None,
        })
    }

    /// Text of every run, in paint order.
    pub fn label_texts(&self) -> Vec<&str> {
        self.texts().map(|(text, _, _)| text).collect()
    }
}
