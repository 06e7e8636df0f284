//! Declarative layout views.

mod column_view;
mod list_view;
mod row_view;

pub use column_view::{Column, ColumnChild, ColumnView};
pub use list_view::{ItemPadding, ListView, ListViewState};
pub use row_view::{Row, RowChild, RowView, RowViewState, Scrolling};

use zendom::{Element, SizeConstraint, UDim, UDim2, Vec2};

use crate::error::ViewError;

/// A transparent frame the size of its parent.
pub fn view() -> Element {
    Element::view()
}

fn finite_udim(
    view: &'static str,
    field: impl Into<String>,
    value: UDim,
) -> Result<UDim, ViewError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewError::NonFinite {
            view,
            field: field.into(),
        })
    }
}

fn finite_udim2(
    view: &'static str,
    field: impl Into<String>,
    value: UDim2,
) -> Result<UDim2, ViewError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ViewError::NonFinite {
            view,
            field: field.into(),
        })
    }
}

/// A size constraint child when either bound is set.
fn size_constraint(id: String, min: Option<Vec2>, max: Option<Vec2>) -> Option<Element> {
    if min.is_none() && max.is_none() {
        return None;
    }

    let default = SizeConstraint::default();
    Some(
        Element::size_constraint(SizeConstraint {
            min: min.unwrap_or(default.min),
            max: max.unwrap_or(default.max),
        })
        .id(id),
    )
}
