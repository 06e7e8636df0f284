use std::ops::{Add, Sub};

use super::{UDim, UDim2, Vec2};

/// Per-side padding, each side a [`UDim`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: UDim,
    pub top: UDim,
    pub right: UDim,
    pub bottom: UDim,
}

impl Padding {
    pub const ZERO: Self = Self::new(UDim::ZERO, UDim::ZERO, UDim::ZERO, UDim::ZERO);

    pub const fn new(left: UDim, top: UDim, right: UDim, bottom: UDim) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn all(value: UDim) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn axis(horizontal: UDim, vertical: UDim) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    pub const fn left(scale: f32, offset: f32) -> Self {
        Self {
            left: UDim::new(scale, offset),
            ..Self::ZERO
        }
    }

    pub const fn right(scale: f32, offset: f32) -> Self {
        Self {
            right: UDim::new(scale, offset),
            ..Self::ZERO
        }
    }

    pub const fn top(scale: f32, offset: f32) -> Self {
        Self {
            top: UDim::new(scale, offset),
            ..Self::ZERO
        }
    }

    pub const fn bottom(scale: f32, offset: f32) -> Self {
        Self {
            bottom: UDim::new(scale, offset),
            ..Self::ZERO
        }
    }

    /// Same padding on the left and right sides.
    pub const fn horizontal(scale: f32, offset: f32) -> Self {
        Self::axis(UDim::new(scale, offset), UDim::ZERO)
    }

    /// Same padding on the top and bottom sides.
    pub const fn vertical(scale: f32, offset: f32) -> Self {
        Self::axis(UDim::ZERO, UDim::new(scale, offset))
    }

    pub fn from_offsets(offsets: PaddingOffsets) -> Self {
        Self::from_parts(PaddingOffsets::default(), offsets)
    }

    /// Combine a set of per-side scales with a set of per-side offsets.
    pub fn from_parts(scale: PaddingOffsets, offset: PaddingOffsets) -> Self {
        Self::new(
            UDim::new(scale.total_left(), offset.total_left()),
            UDim::new(scale.total_top(), offset.total_top()),
            UDim::new(scale.total_right(), offset.total_right()),
            UDim::new(scale.total_bottom(), offset.total_bottom()),
        )
    }

    /// Left/right resolve against the width, top/bottom against the height.
    pub fn resolve(&self, parent: Vec2) -> Insets {
        Insets {
            left: self.left.resolve(parent.x),
            top: self.top.resolve(parent.y),
            right: self.right.resolve(parent.x),
            bottom: self.bottom.resolve(parent.y),
        }
    }

    /// The fixed pixel amount taken on each axis, ignoring scales.
    pub fn offset_total(&self) -> Vec2 {
        Vec2::new(
            self.left.offset + self.right.offset,
            self.top.offset + self.bottom.offset,
        )
    }
}

impl Add for Padding {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

impl Sub for Padding {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.left - rhs.left,
            self.top - rhs.top,
            self.right - rhs.right,
            self.bottom - rhs.bottom,
        )
    }
}

/// Padding resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn horizontal_total(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Pixel amounts per side. `horizontal` and `vertical` add to both sides of their axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddingOffsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub horizontal: f32,
    pub vertical: f32,
}

impl PaddingOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, value: f32) -> Self {
        self.left = value;
        self
    }

    pub fn top(mut self, value: f32) -> Self {
        self.top = value;
        self
    }

    pub fn right(mut self, value: f32) -> Self {
        self.right = value;
        self
    }

    pub fn bottom(mut self, value: f32) -> Self {
        self.bottom = value;
        self
    }

    pub fn horizontal(mut self, value: f32) -> Self {
        self.horizontal = value;
        self
    }

    pub fn vertical(mut self, value: f32) -> Self {
        self.vertical = value;
        self
    }

    fn total_left(&self) -> f32 {
        self.left + self.horizontal
    }

    fn total_right(&self) -> f32 {
        self.right + self.horizontal
    }

    fn total_top(&self) -> f32 {
        self.top + self.vertical
    }

    fn total_bottom(&self) -> f32 {
        self.bottom + self.vertical
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetPadding {
    Uniform(f32),
    Sides(PaddingOffsets),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetAxisPadding {
    Uniform(f32),
    Axis { horizontal: f32, vertical: f32 },
}

/// Offset-only padding for a widget.
pub fn calculate_padding(padding: &WidgetPadding) -> Padding {
    match padding {
        WidgetPadding::Uniform(value) => Padding::all(UDim::from_offset(*value)),
        WidgetPadding::Sides(offsets) => Padding::from_offsets(*offsets),
    }
}

/// The padding of a widget as a size on each axis (one side only).
pub fn calculate_padding_udim2(padding: &WidgetAxisPadding) -> UDim2 {
    match *padding {
        WidgetAxisPadding::Uniform(value) => UDim2::from_offset(value, value),
        WidgetAxisPadding::Axis {
            horizontal,
            vertical,
        } => UDim2::from_offset(horizontal, vertical),
    }
}
