//! Presentation widgets.

mod auto_sized_text;
mod padding;

pub use auto_sized_text::AutoSizedText;
pub use padding::{PaddingInput, padding_element};
