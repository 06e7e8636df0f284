//! ListView - a view with a built-in list layout that can size itself to its content.

use zendom::{
    Align, Element, FillDirection, Kind, LayoutResult, ListLayout, Padding, UDim, UDim2, Vec2,
};

/// Spacing between list items, in pixels or as a [`UDim`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemPadding {
    Pixels(f32),
    Dim(UDim),
}

impl Default for ItemPadding {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

impl ItemPadding {
    pub fn to_udim(self) -> UDim {
        match self {
            Self::Pixels(px) => UDim::from_offset(px),
            Self::Dim(dim) => dim,
        }
    }
}

impl From<f32> for ItemPadding {
    fn from(px: f32) -> Self {
        Self::Pixels(px)
    }
}

impl From<UDim> for ItemPadding {
    fn from(dim: UDim) -> Self {
        Self::Dim(dim)
    }
}

/// Id of the list layout a list view with `view_id` creates.
fn layout_id(view_id: &str) -> String {
    format!("{view_id}-layout")
}

/// The content size a list view last measured.
///
/// Written from the layout pass notification, read on the next build.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListViewState {
    content_size: Vec2,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_size(&self) -> Vec2 {
        self.content_size
    }

    /// Content size change notification. Returns true if the size changed.
    pub fn on_content_size(&mut self, size: Vec2) -> bool {
        if self.content_size == size {
            return false;
        }
        log::debug!(
            "[list-view] content size {:?} -> {:?}",
            self.content_size,
            size
        );
        self.content_size = size;
        true
    }

    /// Pick up the measured size of the list view `view_id` from a layout pass.
    pub fn sync(&mut self, view_id: &str, layout: &LayoutResult) -> bool {
        match layout.content_size(&layout_id(view_id)) {
            Some(size) => self.on_content_size(size),
            None => false,
        }
    }
}

/// A list view builder.
///
/// Children are stacked along `fill_direction`. Any list or page layout passed
/// as a child is dropped, as is a padding child when the view has its own padding.
#[derive(Debug, Clone)]
pub struct ListView {
    id: String,
    size: UDim2,
    position: UDim2,
    anchor_point: Vec2,
    fill_direction: FillDirection,
    automatic_size: bool,
    item_padding: ItemPadding,
    horizontal_alignment: Option<Align>,
    vertical_alignment: Option<Align>,
    padding: Option<Padding>,
    children: Vec<Element>,
}

impl ListView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: UDim2::from_scale(1.0, 1.0),
            position: UDim2::ZERO,
            anchor_point: Vec2::ZERO,
            fill_direction: FillDirection::Vertical,
            automatic_size: false,
            item_padding: ItemPadding::default(),
            horizontal_alignment: None,
            vertical_alignment: None,
            padding: None,
            children: Vec::new(),
        }
    }

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

    pub fn fill_direction(mut self, direction: FillDirection) -> Self {
        self.fill_direction = direction;
        self
    }

    /// Size the fill-direction axis to the measured content.
    pub fn automatic_size(mut self, automatic: bool) -> Self {
        self.automatic_size = automatic;
        self
    }

    pub fn item_padding(mut self, padding: impl Into<ItemPadding>) -> Self {
        self.item_padding = padding.into();
        self
    }

    pub fn horizontal_alignment(mut self, align: Align) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    pub fn vertical_alignment(mut self, align: Align) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Id of the list layout this view creates, as reported in [`LayoutResult`].
    pub fn layout_id(&self) -> String {
        layout_id(&self.id)
    }

    fn resolved_size(&self, state: &ListViewState) -> UDim2 {
        if !self.automatic_size {
            return self.size;
        }

        let content = state.content_size();
        let padding = self.padding.map(|p| p.offset_total()).unwrap_or_default();
        if self.fill_direction.is_horizontal() {
            UDim2::from_udims(UDim::from_offset(content.x + padding.x), self.size.y)
        } else {
            UDim2::from_udims(self.size.x, UDim::from_offset(content.y + padding.y))
        }
    }

    /// Build the list view element.
    pub fn build(self, state: &ListViewState) -> Element {
        let size = self.resolved_size(state);
        let has_padding = self.padding.is_some();
        let view_id = self.id.clone();

        let children = self.children.into_iter().filter(|child| match &child.kind {
            Kind::ListLayout(_) | Kind::PageLayout(_) => {
                log::warn!(
                    "Duplicate layout '{}' in ListView '{}' - removed!",
                    child.id,
                    view_id
                );
                false
            }
            Kind::Padding(_) if has_padding => {
                log::warn!(
                    "Duplicate padding '{}' in ListView '{}' - removed!",
                    child.id,
                    view_id
                );
                false
            }
            _ => true,
        });
        let children: Vec<Element> = children.collect();

        let list = ListLayout::new(self.fill_direction)
            .padding(self.item_padding.to_udim())
            .horizontal_alignment(self.horizontal_alignment.unwrap_or_default())
            .vertical_alignment(self.vertical_alignment.unwrap_or_default());

        Element::view()
            .id(&self.id)
            .size(size)
            .position(self.position)
            .anchor_point(self.anchor_point)
            .child(Element::list_layout(list).id(layout_id(&self.id)))
            .maybe_child(
                self.padding
                    .map(|p| Element::padding(p).id(format!("{}-padding", self.id))),
            )
            .children(children)
    }
}
