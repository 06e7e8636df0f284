use crate::types::{
    Align, Color, FillDirection, Font, Padding, Rgb, SortOrder, TextXAlignment, UDim, UDim2, Vec2,
};

/// What an element is. Modifier kinds configure their parent and take no space themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Kind {
    #[default]
    Frame,
    Text(TextLabel),
    ScrollingFrame(ScrollingFrame),
    ListLayout(ListLayout),
    PageLayout(PageLayout),
    Padding(Padding),
    SizeConstraint(SizeConstraint),
    TextSizeConstraint(TextSizeConstraint),
}

impl Kind {
    pub fn is_modifier(&self) -> bool {
        !matches!(self, Self::Frame | Self::Text(_) | Self::ScrollingFrame(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Frame => "Frame",
            Self::Text(_) => "TextLabel",
            Self::ScrollingFrame(_) => "ScrollingFrame",
            Self::ListLayout(_) => "ListLayout",
            Self::PageLayout(_) => "PageLayout",
            Self::Padding(_) => "Padding",
            Self::SizeConstraint(_) => "SizeConstraint",
            Self::TextSizeConstraint(_) => "TextSizeConstraint",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub text_size: f32,
    pub font: Font,
    pub color: Color,
    pub wrapped: bool,
    pub scaled: bool,
    pub x_alignment: TextXAlignment,
}

impl Default for TextLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_size: 14.0,
            font: Font::default(),
            color: Color::default(),
            wrapped: false,
            scaled: false,
            x_alignment: TextXAlignment::default(),
        }
    }
}

impl TextLabel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn wrapped(mut self, wrapped: bool) -> Self {
        self.wrapped = wrapped;
        self
    }

    pub fn scaled(mut self, scaled: bool) -> Self {
        self.scaled = scaled;
        self
    }

    pub fn x_alignment(mut self, alignment: TextXAlignment) -> Self {
        self.x_alignment = alignment;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollingFrame {
    pub canvas_size: UDim2,
    pub scroll_bar_thickness: f32,
    pub scroll_bar_color: Rgb,
}

impl Default for ScrollingFrame {
    fn default() -> Self {
        Self {
            canvas_size: UDim2::ZERO,
            scroll_bar_thickness: 12.0,
            scroll_bar_color: Rgb::BLACK,
        }
    }
}

/// Arranges the parent's other children one after another.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListLayout {
    pub fill_direction: FillDirection,
    pub padding: UDim,
    pub horizontal_alignment: Align,
    pub vertical_alignment: Align,
    pub sort_order: SortOrder,
}

impl ListLayout {
    pub fn new(fill_direction: FillDirection) -> Self {
        Self {
            fill_direction,
            ..Default::default()
        }
    }

    pub fn padding(mut self, padding: UDim) -> Self {
        self.padding = padding;
        self
    }

    pub fn horizontal_alignment(mut self, align: Align) -> Self {
        self.horizontal_alignment = align;
        self
    }

    pub fn vertical_alignment(mut self, align: Align) -> Self {
        self.vertical_alignment = align;
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Alignment along the fill direction.
    pub fn main_alignment(&self) -> Align {
        if self.fill_direction.is_horizontal() {
            self.horizontal_alignment
        } else {
            self.vertical_alignment
        }
    }

    /// Alignment across the fill direction.
    pub fn cross_alignment(&self) -> Align {
        if self.fill_direction.is_horizontal() {
            self.vertical_alignment
        } else {
            self.horizontal_alignment
        }
    }
}

/// Shows a single child at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageLayout {
    pub current_index: usize,
    pub sort_order: SortOrder,
    pub animated: bool,
    pub scroll_wheel_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for SizeConstraint {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(f32::INFINITY, f32::INFINITY),
        }
    }
}

impl SizeConstraint {
    pub fn clamp(&self, size: Vec2) -> Vec2 {
        size.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSizeConstraint {
    pub min_text_size: Option<f32>,
    pub max_text_size: Option<f32>,
}
