//! ColumnView - columns laid out side by side, sharing the width.

use zendom::{
    Align, AutomaticSize, Element, FillDirection, ListLayout, Padding, Separators, SlotSpec,
    SortOrder, UDim, UDim2, compute_slots,
};

use super::{finite_udim, finite_udim2};
use crate::error::ViewError;

/// One column of a [`ColumnView`].
///
/// Without a width the column shares the space left by sized columns and
/// spacing equally with the other unsized columns.
#[derive(Debug, Clone, Default)]
pub struct Column {
    key: Option<String>,
    width: Option<UDim>,
    vertical_alignment: Option<Align>,
    horizontal_alignment: Option<Align>,
    children: Vec<Element>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the generated column frame.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn width(mut self, width: UDim) -> Self {
        self.width = Some(width);
        self
    }

    pub fn vertical_alignment(mut self, align: Align) -> Self {
        self.vertical_alignment = Some(align);
        self
    }

    /// Overrides the default: first column left, last right, others centered.
    pub fn horizontal_alignment(mut self, align: Align) -> Self {
        self.horizontal_alignment = Some(align);
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
            size: self.width,
            cross_size: None,
            align: self.horizontal_alignment,
        }
    }
}

/// A child of a column view. Only columns are laid out.
#[derive(Debug, Clone)]
pub enum ColumnChild {
    Column(Column),
    Other(Element),
}

impl From<Column> for ColumnChild {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Element> for ColumnChild {
    fn from(element: Element) -> Self {
        Self::Other(element)
    }
}

/// A view that scales its columns by how many there are, or by their width.
#[derive(Debug, Clone)]
pub struct ColumnView {
    id: String,
    size: UDim2,
    column_spacing: UDim,
    padding: Option<Padding>,
    separators: Separators,
    children: Vec<ColumnChild>,
}

impl ColumnView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: UDim2::new(1.0, 0.0, 0.0, 0.0),
            column_spacing: UDim::ZERO,
            padding: None,
            separators: Separators::default(),
            children: Vec::new(),
        }
    }

    pub fn size(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    /// Spacing between columns. Use [`ColumnView::padding`] for outer padding.
    pub fn column_spacing(mut self, spacing: UDim) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.children.push(ColumnChild::Column(column));
        self
    }

    pub fn child(mut self, child: impl Into<ColumnChild>) -> Self {
        self.children.push(child.into());
        self
    }

    fn columns(&self) -> impl Iterator<Item = &Column> {
        self.children.iter().filter_map(|c| match c {
            ColumnChild::Column(column) => Some(column),
            ColumnChild::Other(_) => None,
        })
    }

    fn validate(&self) -> Result<(), ViewError> {
        finite_udim2("ColumnView", "size", self.size)?;
        finite_udim("ColumnView", "column_spacing", self.column_spacing)?;
        for (index, column) in self.columns().enumerate() {
            if let Some(width) = column.width {
                finite_udim("ColumnView", format!("column {index} width"), width)?;
            }
        }
        Ok(())
    }

    /// Build the column view element.
    pub fn build(self) -> Result<Element, ViewError> {
        self.validate()?;

        let specs: Vec<SlotSpec> = self.columns().map(Column::slot_spec).collect();
        let slots = compute_slots(&specs, self.column_spacing, self.size.x, self.separators);

        let mut columns = Vec::with_capacity(slots.len());
        let mut slot_iter = slots.iter();
        for child in self.children {
            let column = match child {
                ColumnChild::Column(column) => column,
                ColumnChild::Other(other) => {
                    log::debug!(
                        "[column-view] '{}' ignores non-column child '{}'",
                        self.id,
                        other.id
                    );
                    continue;
                }
            };
            let Some(slot) = slot_iter.next() else {
                break;
            };

            let list = ListLayout::new(FillDirection::Vertical)
                .vertical_alignment(column.vertical_alignment.unwrap_or_default())
                .horizontal_alignment(slot.align);
            let key = column
                .key
                .unwrap_or_else(|| format!("{}-column-{}", self.id, slot.index));

            columns.push(
                Element::view()
                    .id(key)
                    .size(UDim2::from_udims(slot.main, slot.cross))
                    .automatic_size(AutomaticSize::Y)
                    .layout_order(slot.index as i32)
                    .child(Element::list_layout(list))
                    .children(column.children),
            );
        }

        let list = ListLayout::new(FillDirection::Horizontal)
            .padding(self.column_spacing)
            .sort_order(SortOrder::LayoutOrder);

        Ok(Element::view()
            .id(&self.id)
            .size(self.size)
            .automatic_size(AutomaticSize::Y)
            .child(Element::list_layout(list).id(format!("{}-layout", self.id)))
            .maybe_child(
                self.padding
                    .map(|p| Element::padding(p).id(format!("{}-padding", self.id))),
            )
            .children(columns))
    }
}
