use std::sync::atomic::{AtomicU64, Ordering};

use super::{
    Kind, ListLayout, PageLayout, ScrollingFrame, SizeConstraint, TextLabel, TextSizeConstraint,
};
use crate::types::{AutomaticSize, Padding, UDim2, Vec2};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: Kind,

    // Geometry
    pub size: UDim2,
    pub position: UDim2,
    pub anchor_point: Vec2,
    pub automatic_size: AutomaticSize,

    // Ordering
    pub layout_order: i32,
    pub z_index: i32,

    // Visual
    pub visible: bool,
    pub clips_descendants: bool,

    pub children: Vec<Element>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: Kind::Frame,
            size: UDim2::ZERO,
            position: UDim2::ZERO,
            anchor_point: Vec2::ZERO,
            automatic_size: AutomaticSize::None,
            layout_order: 0,
            z_index: 1,
            visible: true,
            clips_descendants: false,
            children: Vec::new(),
        }
    }
}

impl Element {
    pub fn frame() -> Self {
        Self {
            id: generate_id("frame"),
            ..Default::default()
        }
    }

    /// A frame that fills its parent.
    pub fn view() -> Self {
        Self {
            id: generate_id("view"),
            size: UDim2::from_scale(1.0, 1.0),
            ..Default::default()
        }
    }

    pub fn text(label: TextLabel) -> Self {
        Self {
            id: generate_id("text"),
            kind: Kind::Text(label),
            ..Default::default()
        }
    }

    pub fn scrolling_frame(frame: ScrollingFrame) -> Self {
        Self {
            id: generate_id("scroll"),
            kind: Kind::ScrollingFrame(frame),
            ..Default::default()
        }
    }

    pub fn list_layout(layout: ListLayout) -> Self {
        Self {
            id: generate_id("list"),
            kind: Kind::ListLayout(layout),
            ..Default::default()
        }
    }

    pub fn page_layout(layout: PageLayout) -> Self {
        Self {
            id: generate_id("pages"),
            kind: Kind::PageLayout(layout),
            ..Default::default()
        }
    }

    pub fn padding(padding: Padding) -> Self {
        Self {
            id: generate_id("padding"),
            kind: Kind::Padding(padding),
            ..Default::default()
        }
    }

    pub fn size_constraint(constraint: SizeConstraint) -> Self {
        Self {
            id: generate_id("constraint"),
            kind: Kind::SizeConstraint(constraint),
            ..Default::default()
        }
    }

    pub fn text_size_constraint(constraint: TextSizeConstraint) -> Self {
        Self {
            id: generate_id("text-constraint"),
            kind: Kind::TextSizeConstraint(constraint),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Geometry
    pub fn size(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    pub fn position(mut self, position: UDim2) -> Self {
        self.position = position;
        self
    }

    pub fn anchor_point(mut self, anchor_point: Vec2) -> Self {
        self.anchor_point = anchor_point;
        self
    }

    pub fn automatic_size(mut self, automatic_size: AutomaticSize) -> Self {
        self.automatic_size = automatic_size;
        self
    }

    // Ordering
    pub fn layout_order(mut self, order: i32) -> Self {
        self.layout_order = order;
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    // Visual
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn clips_descendants(mut self, clips: bool) -> Self {
        self.clips_descendants = clips;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Like [`Element::child`], but skips `None`.
    pub fn maybe_child(mut self, child: Option<Element>) -> Self {
        self.children.extend(child);
        self
    }

    pub fn is_modifier(&self) -> bool {
        self.kind.is_modifier()
    }

    /// Children that take part in layout.
    pub fn content_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|c| !c.is_modifier())
    }

    /// First child whose kind matches `pick`.
    pub fn find_modifier<T>(&self, pick: impl Fn(&Kind) -> Option<T>) -> Option<T> {
        self.children.iter().find_map(|c| pick(&c.kind))
    }
}
