//! TabController - renders tabs from the tab items among its children.

use std::fmt;
use std::rc::Rc;

use zendom::{Element, FillDirection, ListLayout, SortOrder, UDim, UDim2};

/// Tab item props that carry their own layout order.
pub trait SortableTab {
    fn tab_index(&self) -> i32;
}

type TabClicked<T> = Rc<dyn Fn(usize, &T)>;

/// Delegate that reports a click on one tab to the controller's handler.
pub struct TabClick<T> {
    index: usize,
    item: T,
    handler: TabClicked<T>,
}

impl<T: Clone> Clone for TabClick<T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            item: self.item.clone(),
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TabClick<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabClick")
            .field("index", &self.index)
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

impl<T> TabClick<T> {
    /// Position of the tab among the tabs (not among all children).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn invoke(&self) {
        (self.handler)(self.index, &self.item);
    }
}

/// Everything needed to render one tab.
#[derive(Debug)]
pub struct TabRequest<'a, T> {
    pub tab_item: &'a T,
    pub layout_order: i32,
    pub is_active: bool,
    pub click: TabClick<T>,
}

/// Everything needed to render a custom tab container.
pub struct TabContainerRequest<'a, T> {
    pub tabs: Vec<Element>,
    pub other: Vec<Element>,
    pub controller: &'a TabController<T>,
}

/// A child of a tab controller. Tab items are rendered as tabs, the rest pass through.
#[derive(Debug, Clone)]
pub enum TabChild<T> {
    Tab(T),
    Other(Element),
}

type RenderTab<T> = Rc<dyn Fn(TabRequest<'_, T>) -> Element>;
type RenderContainer<T> = Rc<dyn Fn(TabContainerRequest<'_, T>) -> Element>;

/// A tab controller builder.
pub struct TabController<T> {
    id: String,
    size: UDim2,
    position: UDim2,
    tab_direction: FillDirection,
    tab_padding: Option<UDim>,
    tab_sort_order: SortOrder,
    selected_tab_index: usize,
    children: Vec<TabChild<T>>,
    render_tab_item: RenderTab<T>,
    on_tab_clicked: TabClicked<T>,
    render_tab_container: Option<RenderContainer<T>>,
}

impl<T> fmt::Debug for TabController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabController")
            .field("id", &self.id)
            .field("tab_direction", &self.tab_direction)
            .field("selected_tab_index", &self.selected_tab_index)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

impl<T: SortableTab + Clone> TabController<T> {
    pub fn new(
        id: impl Into<String>,
        render_tab_item: impl Fn(TabRequest<'_, T>) -> Element + 'static,
        on_tab_clicked: impl Fn(usize, &T) + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            size: UDim2::from_scale(1.0, 1.0),
            position: UDim2::ZERO,
            tab_direction: FillDirection::Horizontal,
            tab_padding: None,
            tab_sort_order: SortOrder::LayoutOrder,
            selected_tab_index: 0,
            children: Vec::new(),
            render_tab_item: Rc::new(render_tab_item),
            on_tab_clicked: Rc::new(on_tab_clicked),
            render_tab_container: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn size(mut self, size: UDim2) -> Self {
        self.size = size;
        self
    }

    pub fn position(mut self, position: UDim2) -> Self {
        self.position = position;
        self
    }

    pub fn tab_direction(mut self, direction: FillDirection) -> Self {
        self.tab_direction = direction;
        self
    }

    pub fn tab_padding(mut self, padding: UDim) -> Self {
        self.tab_padding = Some(padding);
        self
    }

    pub fn tab_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.tab_sort_order = sort_order;
        self
    }

    pub fn selected_tab_index(mut self, index: usize) -> Self {
        self.selected_tab_index = index;
        self
    }

    pub fn tab(mut self, item: T) -> Self {
        self.children.push(TabChild::Tab(item));
        self
    }

    pub fn other(mut self, element: Element) -> Self {
        self.children.push(TabChild::Other(element));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = TabChild<T>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Replace the default container (a view with a list layout).
    pub fn render_tab_container(
        mut self,
        render: impl Fn(TabContainerRequest<'_, T>) -> Element + 'static,
    ) -> Self {
        self.render_tab_container = Some(Rc::new(render));
        self
    }

    /// Build the tab container. Returns `None` without children.
    pub fn build(mut self) -> Option<Element> {
        if self.children.is_empty() {
            return None;
        }

        let mut tabs = Vec::new();
        let mut other = Vec::new();
        for child in std::mem::take(&mut self.children) {
            match child {
                TabChild::Tab(item) => {
                    let index = tabs.len();
                    let request = TabRequest {
                        tab_item: &item,
                        layout_order: item.tab_index(),
                        is_active: index == self.selected_tab_index,
                        click: TabClick {
                            index,
                            item: item.clone(),
                            handler: Rc::clone(&self.on_tab_clicked),
                        },
                    };
                    tabs.push((self.render_tab_item)(request));
                }
                TabChild::Other(element) => other.push(element),
            }
        }

        if let Some(render) = self.render_tab_container.clone() {
            return Some(render(TabContainerRequest {
                tabs,
                other,
                controller: &self,
            }));
        }

        let mut list = ListLayout::new(self.tab_direction).sort_order(self.tab_sort_order);
        if let Some(padding) = self.tab_padding {
            list = list.padding(padding);
        }

        Some(
            Element::view()
                .id(&self.id)
                .size(self.size)
                .position(self.position)
                .child(Element::list_layout(list).id(format!("{}-layout", self.id)))
                .children(other)
                .children(tabs),
        )
    }
}
