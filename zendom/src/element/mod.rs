mod content;
mod node;

pub use content::{
    Kind, ListLayout, PageLayout, ScrollingFrame, SizeConstraint, TextLabel, TextSizeConstraint,
};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}
