pub mod element;
pub mod layout;
pub mod text;
pub mod types;

pub use element::{
    find_element, Element, Kind, ListLayout, PageLayout, ScrollingFrame, SizeConstraint, TextLabel,
    TextSizeConstraint,
};
pub use layout::{
    compute_slots, layout, LayoutResult, MeasureState, Rect, ResolvedSlot, Separators, SlotLayout,
    SlotSpec,
};
pub use types::*;
