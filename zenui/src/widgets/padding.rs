//! Padding helper element.

use zendom::{Element, Padding, PaddingOffsets};

/// Padding given either as a full [`Padding`] or as pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddingInput {
    Dim(Padding),
    Offsets(PaddingOffsets),
}

impl From<Padding> for PaddingInput {
    fn from(padding: Padding) -> Self {
        Self::Dim(padding)
    }
}

impl From<PaddingOffsets> for PaddingInput {
    fn from(offsets: PaddingOffsets) -> Self {
        Self::Offsets(offsets)
    }
}

impl PaddingInput {
    pub fn to_padding(self) -> Padding {
        match self {
            Self::Dim(padding) => padding,
            Self::Offsets(offsets) => Padding::from_offsets(offsets),
        }
    }
}

/// A padding modifier for its parent.
pub fn padding_element(padding: impl Into<PaddingInput>) -> Element {
    Element::padding(padding.into().to_padding())
}
