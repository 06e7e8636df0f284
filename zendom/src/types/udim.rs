use std::ops::{Add, Mul, Neg, Sub};

/// A one-axis size made of a fraction of the parent plus a fixed pixel amount.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim {
    pub scale: f32,
    pub offset: f32,
}

impl UDim {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const FULL: Self = Self::new(1.0, 0.0);

    pub const fn new(scale: f32, offset: f32) -> Self {
        Self { scale, offset }
    }

    pub const fn from_scale(scale: f32) -> Self {
        Self::new(scale, 0.0)
    }

    pub const fn from_offset(offset: f32) -> Self {
        Self::new(0.0, offset)
    }

    /// Resolve against the parent's length on the same axis.
    pub fn resolve(&self, parent: f32) -> f32 {
        self.scale * parent + self.offset
    }

    pub fn is_zero(&self) -> bool {
        self.scale == 0.0 && self.offset == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.offset.is_finite()
    }
}

impl Add for UDim {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.scale + rhs.scale, self.offset + rhs.offset)
    }
}

impl Sub for UDim {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.scale - rhs.scale, self.offset - rhs.offset)
    }
}

impl Neg for UDim {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.scale, -self.offset)
    }
}

impl Mul<f32> for UDim {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.scale * rhs, self.offset * rhs)
    }
}

/// Two-axis size or position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim2 {
    pub x: UDim,
    pub y: UDim,
}

impl UDim2 {
    pub const ZERO: Self = Self::from_udims(UDim::ZERO, UDim::ZERO);

    pub const fn new(x_scale: f32, x_offset: f32, y_scale: f32, y_offset: f32) -> Self {
        Self {
            x: UDim::new(x_scale, x_offset),
            y: UDim::new(y_scale, y_offset),
        }
    }

    pub const fn from_udims(x: UDim, y: UDim) -> Self {
        Self { x, y }
    }

    pub const fn from_scale(x: f32, y: f32) -> Self {
        Self::new(x, 0.0, y, 0.0)
    }

    pub const fn from_offset(x: f32, y: f32) -> Self {
        Self::new(0.0, x, 0.0, y)
    }

    pub fn resolve(&self, parent: Vec2) -> Vec2 {
        Vec2::new(self.x.resolve(parent.x), self.y.resolve(parent.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for UDim2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_udims(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Absolute pixel pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
