//! PageController - shows one page at a time.

use std::fmt;
use std::rc::Rc;

use zendom::{Element, PageLayout, SortOrder, UDim2};

use crate::error::ControllerError;

/// A page controller builder. Any UI that switches between pages can use it.
#[derive(Clone)]
pub struct PageController {
    id: String,
    size: UDim2,
    position: UDim2,
    sort_order: SortOrder,
    selected_page_index: usize,
    pages: Vec<Element>,
    on_page_changed: Option<Rc<dyn Fn(usize)>>,
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("id", &self.id)
            .field("selected_page_index", &self.selected_page_index)
            .field("pages", &self.pages.len())
            .finish_non_exhaustive()
    }
}

impl PageController {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: UDim2::from_scale(1.0, 1.0),
            position: UDim2::ZERO,
            sort_order: SortOrder::LayoutOrder,
            selected_page_index: 0,
            pages: Vec::new(),
            on_page_changed: None,
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

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn selected_page_index(mut self, index: usize) -> Self {
        self.selected_page_index = index;
        self
    }

    pub fn page(mut self, page: Element) -> Self {
        self.pages.push(page);
        self
    }

    pub fn pages(mut self, pages: impl IntoIterator<Item = Element>) -> Self {
        self.pages.extend(pages);
        self
    }

    /// Called whenever the shown page changes after mounting.
    pub fn on_page_changed(mut self, handler: impl Fn(usize) + 'static) -> Self {
        self.on_page_changed = Some(Rc::new(handler));
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn check(&self, index: usize) -> Result<usize, ControllerError> {
        if index < self.page_count() {
            Ok(index)
        } else {
            Err(ControllerError::PageOutOfRange {
                index,
                count: self.page_count(),
            })
        }
    }

    /// Build the page container showing the state's page.
    pub fn build(self, state: &PageState) -> Element {
        let layout = PageLayout {
            current_index: state.page_index(),
            sort_order: self.sort_order,
            animated: false,
            scroll_wheel_input: false,
        };

        Element::frame()
            .id(&self.id)
            .z_index(2)
            .clips_descendants(true)
            .size(self.size)
            .position(self.position)
            .child(Element::page_layout(layout).id(format!("{}-pages", self.id)))
            .children(self.pages)
    }
}

/// The page a controller currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    page_index: usize,
}

impl PageState {
    pub fn new(controller: &PageController) -> Self {
        Self {
            page_index: controller.selected_page_index,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Jump to the selected page once the controller is in the tree.
    pub fn did_mount(&mut self, controller: &PageController) -> Result<(), ControllerError> {
        self.page_index = controller.check(controller.selected_page_index)?;
        Ok(())
    }

    /// Follow a new selection. Fires `on_page_changed` and returns true only if the page changed.
    pub fn did_update(&mut self, controller: &PageController) -> Result<bool, ControllerError> {
        let selected = controller.selected_page_index;
        if selected == self.page_index {
            return Ok(false);
        }

        self.page_index = controller.check(selected)?;
        log::debug!("[page] '{}' jumped to page {}", controller.id, selected);

        if let Some(handler) = &controller.on_page_changed {
            handler(selected);
        }
        Ok(true)
    }
}
