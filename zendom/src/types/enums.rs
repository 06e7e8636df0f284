#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillDirection {
    Horizontal,
    #[default]
    Vertical,
}

impl FillDirection {
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// Placement along one axis. `Start` is left/top, `End` is right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    /// Offset of an item of `size` placed within `available` space.
    pub fn offset(self, available: f32, size: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => (available - size) / 2.0,
            Self::End => available - size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutomaticSize {
    #[default]
    None,
    X,
    Y,
    XY,
}

impl AutomaticSize {
    pub const fn from_axes(x: bool, y: bool) -> Self {
        match (x, y) {
            (true, true) => Self::XY,
            (true, false) => Self::X,
            (false, true) => Self::Y,
            (false, false) => Self::None,
        }
    }

    pub const fn x(self) -> bool {
        matches!(self, Self::X | Self::XY)
    }

    pub const fn y(self) -> bool {
        matches!(self, Self::Y | Self::XY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    LayoutOrder,
    Insertion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextXAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    SourceSans,
    Gotham,
    Code,
}

impl Font {
    /// Average glyph advance as a fraction of the text size.
    pub const fn advance_ratio(self) -> f32 {
        match self {
            Self::SourceSans => 0.5,
            Self::Gotham => 0.55,
            Self::Code => 0.6,
        }
    }
}
