mod color;
mod enums;
mod padding;
mod udim;

pub use color::{Color, Rgb};
pub use enums::{Align, AutomaticSize, FillDirection, Font, SortOrder, TextXAlignment};
pub use padding::{
    calculate_padding, calculate_padding_udim2, Insets, Padding, PaddingOffsets, WidgetAxisPadding,
    WidgetPadding,
};
pub use udim::{UDim, UDim2, Vec2};
