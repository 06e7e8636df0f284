//! RowView - rows stacked vertically, sharing the height.

use zendom::{
    Align, AutomaticSize, Element, FillDirection, LayoutResult, ListLayout, Padding, Rgb,
    ScrollingFrame, Separators, SlotSpec, SortOrder, UDim, UDim2, Vec2, compute_slots,
};

use super::{finite_udim, finite_udim2, size_constraint};
use crate::error::ViewError;

/// One row of a [`RowView`].
#[derive(Debug, Clone, Default)]
pub struct Row {
    key: Option<String>,
    height: Option<UDim>,
    min_height: Option<f32>,
    max_height: Option<f32>,
    automatic_height: bool,
    vertical_alignment: Option<Align>,
    horizontal_alignment: Option<Align>,
    layout_padding: Option<UDim>,
    sort_order: SortOrder,
    children: Vec<Element>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the generated row frame.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn height(mut self, height: UDim) -> Self {
        self.height = Some(height);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Grow the row to its content instead of taking a share of the view.
    pub fn automatic_height(mut self, automatic: bool) -> Self {
        self.automatic_height = automatic;
        self
    }

    /// Overrides the default: first row top, last bottom, others centered.
    pub fn vertical_alignment(mut self, align: Align) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    pub fn horizontal_alignment(mut self, align: Align) -> Self {
        self.horizontal_alignment = Some(align);
        self
    }

    /// Spacing between the items inside this row.
    pub fn layout_padding(mut self, padding: UDim) -> Self {
        self.layout_padding = Some(padding);
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
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

    fn slot_spec(&self) -> SlotSpec {
        SlotSpec {
            size: self.height,
            cross_size: None,
            align: self.vertical_alignment,
        }
    }
}

/// A child of a row view. Only rows are laid out.
#[derive(Debug, Clone)]
pub enum RowChild {
    Row(Row),
    Other(Element),
}

impl From<Row> for RowChild {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<Element> for RowChild {
    fn from(element: Element) -> Self {
        Self::Other(element)
    }
}

/// Whether a row view scrolls, and how its scroll bar looks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scrolling {
    #[default]
    Disabled,
    Enabled(ScrollingFrame),
}

impl Scrolling {
    /// Scrolling with a thin black scroll bar.
    pub fn enabled() -> Self {
        Self::Enabled(ScrollingFrame {
            scroll_bar_thickness: 5.0,
            scroll_bar_color: Rgb::BLACK,
            ..Default::default()
        })
    }
}

/// The content size a row view last measured. Drives the scrolling canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowViewState {
    content_size: Vec2,
}

impl RowViewState {
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
            "[row-view] content size {:?} -> {:?}",
            self.content_size,
            size
        );
        self.content_size = size;
        true
    }

    /// Pick up the measured size of the row view `view_id` from a layout pass.
    pub fn sync(&mut self, view_id: &str, layout: &LayoutResult) -> bool {
        match layout.content_size(&format!("{view_id}-layout")) {
            Some(size) => self.on_content_size(size),
            None => false,
        }
    }
}

/// A view that scales its rows by how many there are, or by their height.
#[derive(Debug, Clone)]
pub struct RowView {
    id: String,
    size: UDim2,
    row_width: UDim,
    automatic_size: Option<AutomaticSize>,
    scrolling: Scrolling,
    row_spacing: UDim,
    padding: Option<Padding>,
    vertical_alignment: Option<Align>,
    min_size: Option<Vec2>,
    max_size: Option<Vec2>,
    separators: Separators,
    children: Vec<RowChild>,
}

impl RowView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: UDim2::from_scale(1.0, 1.0),
            row_width: UDim::ZERO,
            automatic_size: None,
            scrolling: Scrolling::Disabled,
            row_spacing: UDim::ZERO,
            padding: None,
            vertical_alignment: None,
            min_size: None,
            max_size: None,
            separators: Separators::default(),
            children: Vec::new(),
        }
    }

    pub fn size(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    /// Width of every row. Zero makes rows size to their content.
    pub fn row_width(mut self, width: UDim) -> Self {
        self.row_width = width;
        self
    }

    pub fn automatic_size(mut self, automatic_size: AutomaticSize) -> Self {
        self.automatic_size = Some(automatic_size);
        self
    }

    pub fn scrolling(mut self, scrolling: Scrolling) -> Self {
        self.scrolling = scrolling;
        self
    }

    pub fn row_spacing(mut self, spacing: UDim) -> Self {
        self.row_spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn vertical_alignment(mut self, align: Align) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    pub fn max_size(mut self, size: Vec2) -> Self {
        self.max_size = Some(size);
        self
    }

    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.children.push(RowChild::Row(row));
        self
    }

    pub fn child(mut self, child: impl Into<RowChild>) -> Self {
        self.children.push(child.into());
        self
    }

    fn rows(&self) -> impl Iterator<Item = &Row> {
        self.children.iter().filter_map(|c| match c {
            RowChild::Row(row) => Some(row),
            RowChild::Other(_) => None,
        })
    }

    fn validate(&self) -> Result<(), ViewError> {
        finite_udim2("RowView", "size", self.size)?;
        finite_udim("RowView", "row_width", self.row_width)?;
        finite_udim("RowView", "row_spacing", self.row_spacing)?;
        for (index, row) in self.rows().enumerate() {
            if let Some(height) = row.height {
                finite_udim("RowView", format!("row {index} height"), height)?;
            }
        }
        Ok(())
    }

    fn build_row(&self, row: Row, main: UDim, index: usize, align: Align) -> Element {
        let size = if row.height.is_some() || !row.automatic_height {
            UDim2::from_udims(self.row_width, main)
        } else {
            UDim2::from_udims(self.row_width, UDim::new(0.0, main.offset))
        };
        let automatic = AutomaticSize::from_axes(self.row_width.is_zero(), row.automatic_height);
        let key = row
            .key
            .unwrap_or_else(|| format!("{}-row-{}", self.id, index));

        let mut list = ListLayout::new(FillDirection::Vertical)
            .vertical_alignment(align)
            .horizontal_alignment(row.horizontal_alignment.unwrap_or_default())
            .sort_order(row.sort_order);
        if let Some(padding) = row.layout_padding {
            list = list.padding(padding);
        }

        Element::view()
            .id(&key)
            .size(size)
            .automatic_size(automatic)
            .layout_order(index as i32)
            .maybe_child(size_constraint(
                format!("{key}-constraint"),
                row.min_height.map(|h| Vec2::new(0.0, h)),
                row.max_height.map(|h| Vec2::new(f32::INFINITY, h)),
            ))
            .child(Element::list_layout(list))
            .children(row.children)
    }

    /// Build the row view element.
    pub fn build(mut self, state: &RowViewState) -> Result<Element, ViewError> {
        self.validate()?;

        let specs: Vec<SlotSpec> = self.rows().map(Row::slot_spec).collect();
        let slots = compute_slots(&specs, self.row_spacing, self.size.y, self.separators);

        let children = std::mem::take(&mut self.children);
        let mut rows = Vec::with_capacity(slots.len());
        let mut slot_iter = slots.iter();
        for child in children {
            let row = match child {
                RowChild::Row(row) => row,
                RowChild::Other(other) => {
                    log::debug!(
                        "[row-view] '{}' ignores non-row child '{}'",
                        self.id,
                        other.id
                    );
                    continue;
                }
            };
            let Some(slot) = slot_iter.next() else {
                break;
            };
            rows.push(self.build_row(row, slot.main, slot.index, slot.align));
        }

        let automatic_size = self.automatic_size.unwrap_or(if self.row_width.is_zero() {
            AutomaticSize::X
        } else {
            AutomaticSize::None
        });

        let (container, default_alignment) = match self.scrolling {
            Scrolling::Disabled => (Element::view(), Align::Center),
            Scrolling::Enabled(mut frame) => {
                let content = state.content_size();
                frame.canvas_size = UDim2::from_offset(content.x, content.y);
                (Element::scrolling_frame(frame), Align::Start)
            }
        };

        let list = ListLayout::new(FillDirection::Vertical)
            .padding(self.row_spacing)
            .sort_order(SortOrder::LayoutOrder)
            .vertical_alignment(self.vertical_alignment.unwrap_or(default_alignment));

        Ok(container
            .id(&self.id)
            .size(self.size)
            .automatic_size(automatic_size)
            .child(Element::list_layout(list).id(format!("{}-layout", self.id)))
            .maybe_child(size_constraint(
                format!("{}-constraint", self.id),
                self.min_size,
                self.max_size,
            ))
            .maybe_child(
                self.padding
                    .map(|p| Element::padding(p).id(format!("{}-padding", self.id))),
            )
            .children(rows))
    }
}
