pub mod flex;
mod measure;
mod rect;
mod resolve;

pub use flex::{compute_slots, default_align, ResolvedSlot, Separators, SlotLayout, SlotSpec};
pub use measure::MeasureState;
pub use rect::Rect;
pub use resolve::{layout, LayoutResult};
