//! AutoSizedText - a text label sized to fit its text.

use zendom::text::measure_text;
use zendom::{Color, Element, Font, TextLabel, TextSizeConstraint, TextXAlignment, UDim2, Vec2};

/// An auto-sized text builder.
#[derive(Debug, Clone)]
pub struct AutoSizedText {
    text: String,
    text_color: Color,
    text_size: f32,
    font: Font,
    limits: Vec2,
    position: UDim2,
    anchor_point: Vec2,
    min_size: Option<Vec2>,
    max_size: Option<Vec2>,
    min_text_size: Option<f32>,
    max_text_size: Option<f32>,
}

impl AutoSizedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: Color::rgb(220, 220, 220),
            text_size: 15.0,
            font: Font::SourceSans,
            limits: Vec2::new(1000.0, 1000.0),
            position: UDim2::ZERO,
            anchor_point: Vec2::ZERO,
            min_size: None,
            max_size: None,
            min_text_size: None,
            max_text_size: None,
        }
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Bounds the text is wrapped and measured within.
    pub fn limits(mut self, limits: Vec2) -> Self {
        self.limits = limits;
        self
    }

    pub fn position(mut self, position: UDim2) -> Self {
        self.position = position;
        self
    }

    pub fn anchor_point(mut self, anchor_point: Vec2) -> Self {
        self.anchor_point = anchor_point;
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn max_size(mut self, size: Vec2) -> Self {
        self.max_size = Some(size);
        self
    }

    pub fn min_text_size(mut self, size: f32) -> Self {
        self.min_text_size = Some(size);
        self
    }

    /// Scale the text down to fit, never above `size`.
    pub fn max_text_size(mut self, size: f32) -> Self {
        self.max_text_size = Some(size);
        self
    }

    /// Pixel size the label will have.
    pub fn measure(&self) -> Vec2 {
        let measured = measure_text(&self.text, self.text_size, self.font, self.limits);
        let mut width = measured.x.max(self.min_size.map_or(0.0, |s| s.x));
        if let Some(max) = self.max_size {
            width = width.min(max.x);
        }
        Vec2::new(width, measured.y)
    }

    /// Build the text label element.
    pub fn build(self) -> Element {
        let size = self.measure();
        let label = TextLabel::new(self.text)
            .text_size(self.text_size)
            .font(self.font)
            .color(self.text_color)
            .wrapped(true)
            .scaled(self.max_text_size.is_some())
            .x_alignment(TextXAlignment::Left);

        Element::text(label)
            .size(UDim2::from_offset(size.x, size.y))
            .position(self.position)
            .anchor_point(self.anchor_point)
            .child(Element::text_size_constraint(TextSizeConstraint {
                min_text_size: self.min_text_size,
                max_text_size: self.max_text_size,
            }))
    }
}
