pub mod controllers;
pub mod error;
pub mod views;
pub mod widgets;

pub use error::{ControllerError, Error, ViewError};
pub use zendom;

pub mod prelude {
    pub use crate::controllers::{
        DragMode, PageController, PageState, SortableTab, TabChild, TabController, Titlebar,
        WindowController,
    };
    pub use crate::error::{ControllerError, Error, ViewError};
    pub use crate::views::{
        Column, ColumnView, ListView, ListViewState, Row, RowView, RowViewState, Scrolling, view,
    };
    pub use crate::widgets::{AutoSizedText, padding_element};
    pub use zendom::{
        Align, AutomaticSize, Element, FillDirection, LayoutResult, Padding, Separators, UDim,
        UDim2, Vec2, layout,
    };
}
