//! Navigation controllers.

mod page;
mod tabs;
mod window;

pub use page::{PageController, PageState};
pub use tabs::{SortableTab, TabChild, TabClick, TabContainerRequest, TabController, TabRequest};
pub use window::{
    DragMode, DragTarget, SnapConfig, SnapMargin, Titlebar, WindowChild, WindowController,
    WindowDrag,
};
